use dotenvy::dotenv;

// (name, fallback) pairs baked into the wasm bundle
const COMPILE_ENV: [(&str, &str); 3] = [
  ("TONCONNECT_MANIFEST_URL", "/tonconnect-manifest.json"),
  ("INVEST_RECEIVER_ADDRESS", ""),
  ("SPLASH_DURATION_MS", "3000"),
];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // a missing .env is fine, every key has a fallback
  let _ = dotenv();

  for (key, fallback) in COMPILE_ENV {
    println!("cargo::rerun-if-env-changed={}", key);
    let value = std::env::var(key).unwrap_or_else(|_| fallback.to_string());
    println!("cargo::rustc-env={}={}", key, value);
  }
}
