pub mod id_util;
pub mod time_util;
