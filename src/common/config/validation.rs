use crate::common::error::SentinelResult;

/// A named configuration section that can validate itself after loading.
pub trait ConfigSection {
    const KEY: &'static str;

    fn validate(&self) -> SentinelResult<()>;
}
