//! Visual theme for OPTCG Collector.

mod styles;

pub use styles::GLOBAL_STYLES;
