//! 执行器统计信息
//!
//! 记录 Schema 语句执行过程中的耗时与行数。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 执行器统计信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorStats {
    /// 返回的行数
    pub num_rows: usize,
    /// 执行时间（微秒），从派发远程调用到 continuation 结束
    pub exec_time_us: u64,
    /// 总时间（微秒），包含授权与等待
    pub total_time_us: u64,
    /// 内存使用峰值（字节）
    pub memory_peak: usize,
}

impl ExecutorStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, count: usize) {
        self.num_rows += count;
    }

    pub fn add_exec_time(&mut self, duration: Duration) {
        self.exec_time_us += duration.as_micros() as u64;
    }

    pub fn add_total_time(&mut self, duration: Duration) {
        self.total_time_us += duration.as_micros() as u64;
    }

    pub fn set_memory_peak(&mut self, peak: usize) {
        if peak > self.memory_peak {
            self.memory_peak = peak;
        }
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
