//! 基础设施层：外部系统交互
//!
//! 提供与 Firestore REST 接口和日志系统的交互能力

pub mod firestore;
pub mod logger;
