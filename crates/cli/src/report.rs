use colored::*;
use hostprobe_core::{CheckResult, PresenceChecker};
use std::io::Write;

pub fn render_host_line(host: &str) -> String {
    format!("Scanning host: {}", host)
}

pub fn render_result_line(result: &CheckResult) -> String {
    if result.installed() {
        format!("Software related to '{}' is installed!", result.fragment)
            .bright_green()
            .to_string()
    } else {
        format!("No software related to '{}' found.", result.fragment)
            .bright_red()
            .to_string()
    }
}

/// 输出主机行，然后按顺序逐个检查并输出结果
///
/// 不会提前退出，也不汇总失败数量。
pub async fn run_report<W: Write>(
    host: &str,
    packages: &[String],
    checker: &PresenceChecker,
    out: &mut W,
) -> std::io::Result<Vec<CheckResult>> {
    writeln!(out, "{}", render_host_line(host))?;

    let mut results = Vec::with_capacity(packages.len());
    for package in packages {
        let result = checker.check(package).await;
        writeln!(out, "{}", render_result_line(&result))?;
        results.push(result);
    }
    out.flush()?;

    Ok(results)
}
