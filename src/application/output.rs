//! 输出抽象层
//!
//! 探测报告按行输出，普通信息走 stdout，错误信息走 stderr：
//! - CLI: 直接打印到终端
//! - Memory: 记录到内存，供测试断言

use std::sync::Mutex;

/// 一行输出及其目标流
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    pub fn text(&self) -> &str {
        match self {
            OutputLine::Stdout(text) | OutputLine::Stderr(text) => text,
        }
    }
}

/// 输出 trait
pub trait Output: Send + Sync {
    /// 输出一行普通信息
    fn line(&self, text: &str);

    /// 输出一行错误信息
    fn error_line(&self, text: &str);
}

/// CLI 输出实现
#[derive(Debug, Default)]
pub struct CliOutput;

impl CliOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for CliOutput {
    fn line(&self, text: &str) {
        println!("{}", text);
    }

    fn error_line(&self, text: &str) {
        eprintln!("{}", text);
    }
}

/// 内存输出实现
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<OutputLine>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按输出顺序返回全部行
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// 仅返回文本，不区分目标流
    pub fn texts(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| line.text().to_string())
            .collect()
    }

    /// 是否有任意一行包含给定片段
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.text().contains(needle))
    }

    fn push(&self, line: OutputLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Output for MemoryOutput {
    fn line(&self, text: &str) {
        self.push(OutputLine::Stdout(text.to_string()));
    }

    fn error_line(&self, text: &str) {
        self.push(OutputLine::Stderr(text.to_string()));
    }
}
