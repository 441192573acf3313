pub mod chart;
pub mod gift_card;
pub mod gift_modal;
pub mod icons;
pub mod nav;
pub mod splash;
pub mod wallet;
