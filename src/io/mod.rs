pub mod sms_tsv;

pub use sms_tsv::{read_sms_tsv, SmsSource};
