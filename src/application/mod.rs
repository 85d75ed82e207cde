//! 应用层：探测流程编排与输出

pub mod output;
pub mod probe;
