pub mod discovery;
pub mod qr;
