//! # Discord 时间戳生成器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  前端 (cli: 表单 / 一次性命令)            │
//! │   日期文本 ── 时间文本 ── 样式代码      结果面板 / 提示   │
//! └───────┬───────────────────────────────────────▲──────────┘
//!         ↓ setter                                │ Option<…>
//! ┌───────┴───────────────────────────────────────┴──────────┐
//! │  input::InputState ── timestamp ── format ── clipboard    │
//! │  (原始输入)           (纪元秒)     (<t:…>)   (异步写入)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! 数据单向同步流动：原始输入 → 时间戳推导 → 标签格式化 →（可选）剪贴板。
//! 推导结果不缓存，每次访问都重新计算。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`timestamp`] | 日期 + 时间文本 → 本地时区纪元秒 |
//! | [`format`] | 静态样式目录与 `<t:…>` 标签格式化 |
//! | [`input`] | 表单输入状态与按需推导 |
//! | [`clipboard`] | 复制原始时间戳或标签到系统剪贴板 |
//! | [`settings`] | 终端前端设置（JSON 文件） |
//! | [`cli`] | 命令行参数、交互表单、结果渲染 |

pub mod error;
pub mod timestamp;
pub mod format;
pub mod input;
pub mod clipboard;
pub mod settings;
pub mod cli;
