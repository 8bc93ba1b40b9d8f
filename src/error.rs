//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举。核心推导链路（日期 → 时间戳 → 标签）
//! 不产生错误，“无值”用 `Option::None` 表达；只有剪贴板写入、设置文件
//! 读取、终端读写和 JSON 输出这些与外部打交道的环节才会返回 `AppError`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `std::io::Error` 提供 `From` 转换，终端读写可直接 `?`。
//! - 实现 `Serialize` 将错误序列化为字符串，供 `--json` 输出使用。

use serde::Serialize;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板读写操作失败（平台拒绝、无显示服务等）
    #[error("剪贴板操作失败: {0}")]
    Clipboard(String),

    /// 终端 I/O 错误
    #[error("输入输出错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件不可用或格式错误
    #[error("设置文件错误: {0}")]
    Settings(String),

    /// 结果序列化为 JSON 失败
    #[error("输出序列化失败: {0}")]
    Output(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// 将错误序列化为人类可读的字符串。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
