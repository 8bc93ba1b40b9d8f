//! 时间戳标签格式化模块
//!
//! # 设计思路
//!
//! - **样式目录**（`catalog`）：七种 Discord 时间戳显示样式的静态只读表，
//!   进程内唯一、初始化一次，其中恰有一项为默认样式。
//! - **标签格式化**（`tag`）：把纪元秒与样式代码拼成 `<t:...>` 标签；
//!   默认样式省略 `:代码` 后缀，得到更短的规范形式。
//!
//! # 实现思路
//!
//! 目录是 `static` 数组而非全局可变状态；查找默认项是对小表的线性扫描。
//! 格式化函数接收 `Option<i64>`，直接沿用时间戳推导的“无值”结果，
//! 调用侧无需再做判空。

mod catalog;
mod tag;

pub use catalog::{
    default_style, default_style_code, find_style, is_default_style, option_label, StyleDescriptor,
    DEFAULT_FIELD_HINT, TIMESTAMP_STYLES,
};
pub use tag::format_tag;
