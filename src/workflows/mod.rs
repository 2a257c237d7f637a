pub mod proceedings;
