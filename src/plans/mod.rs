// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily plans
//!
//! One plan per calendar date: free-form Markdown content, a category tag
//! and a done flag.
//!
//! ## Storage
//! - Plans are stored in the data root as `{YYYY-MM-DD}.json`
//! - A save replaces the whole record; there is no history
//! - Plans are never deleted
//!
//! ## Compatibility
//! - Records written by older versions may lack fields; they load with
//!   defaults rather than failing
//! - The tag is not checked against the tag set on save, so plans may keep
//!   a tag that no longer exists

pub mod date;
pub mod store;

pub use date::PlanDate;
pub use store::{Plan, PlanStore};

/// Markdown sample offered to new users to try the preview
pub const SAMPLE_PLAN: &str = r#"# 每日计划测试案例

## 今日重点
- [x] 完成项目设计文档
- [ ] 代码评审
- [ ] 团队会议

## 任务详情
1. **核心功能开发**
   - 用户认证模块
   - 数据可视化组件
   - `API`接口调试

2. *次要任务*
   - 回复客户邮件
   - 更新项目进度表

## 代码示例
```python
def hello_world():
    print("Hello, Markdown!")
```

## 注意事项
> 重要提示：明天上午10点有客户演示

[项目文档链接](https://example.com)"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_plan_is_markdown() {
        assert!(SAMPLE_PLAN.starts_with("# "));
        assert!(SAMPLE_PLAN.contains("- [ ]"));
        assert!(SAMPLE_PLAN.contains("```python"));
    }
}
