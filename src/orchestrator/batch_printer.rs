//! 批量打印器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责整批图纸的调度和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：打开运行日志、连接键盘、准备进程探测和对话框
//! 2. **批量加载**：扫描目录中所有待打印的图纸（`Vec<InputFile>`）
//! 3. **逐个处理**：一次只打开一张图纸，CAD 窗口是唯一的共享资源
//! 4. **错误升级**：严重错误达到阈值后询问操作员是否继续
//! 5. **全局统计**：汇总每个文件的结果，写日志尾、输出统计、弹出结束提示

use crate::config::Config;
use crate::infrastructure::{
    EnigoInjector, InputInjector, Launcher, Operator, ProcessProbe, SysinfoProbe, SystemLauncher,
    TerminalOperator,
};
use crate::models::{PrintOutcome, RunSummary};
use crate::services::{
    enumerate_inputs, Decision, ErrorEscalator, RunLog, SummaryWriter, TIMESTAMP_FORMAT,
};
use crate::utils::logging::{
    log_aborted, log_file_start, log_files_loaded, log_startup, print_final_stats,
};
use crate::workflow::{PrintCtx, PrintFlow, PrintSettings};
use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// 结束时的提示文字
pub const JOB_ENDED_MESSAGE: &str = "Job ended!";

/// 应用主结构
pub struct App<I, L, P, O> {
    config: Config,
    flow: PrintFlow<I, L, P>,
    operator: O,
    run_log: RunLog,
}

impl App<EnigoInjector, SystemLauncher, SysinfoProbe, TerminalOperator> {
    /// 使用真实的键盘、系统启动器、进程表和终端对话框初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let injector = EnigoInjector::new().context("无法连接键盘输入设备")?;
        Self::with_components(
            config,
            injector,
            SystemLauncher::new(),
            SysinfoProbe::new(),
            TerminalOperator::new(),
        )
    }
}

impl<I, L, P, O> App<I, L, P, O>
where
    I: InputInjector,
    L: Launcher,
    P: ProcessProbe,
    O: Operator,
{
    /// 用给定的能力组件初始化应用
    pub fn with_components(
        config: Config,
        injector: I,
        launcher: L,
        probe: P,
        operator: O,
    ) -> Result<Self> {
        let settings = PrintSettings::from_config(&config)?;
        let run_log = RunLog::open(&config.log_file, &config.logger_name)
            .with_context(|| format!("无法打开日志文件: {}", config.log_file.display()))?;

        log_startup(&config);

        Ok(Self {
            flow: PrintFlow::new(injector, launcher, probe, settings),
            operator,
            run_log,
            config,
        })
    }

    pub fn run_log(&self) -> &RunLog {
        &self.run_log
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    /// 运行应用主逻辑
    ///
    /// 操作员取消时立即返回：不写日志尾，不弹结束提示，`aborted` 为 true。
    pub async fn run(&mut self) -> Result<RunSummary> {
        let directory = self.config.input_dir.clone();

        info!("\n📁 正在扫描待打印的图纸...");
        let files = enumerate_inputs(&directory, &self.config.input_extension)
            .await
            .with_context(|| format!("无法枚举图纸目录: {}", directory.display()))?;
        log_files_loaded(&files);

        let started_at = self.run_log.start(&directory)?;
        let mut summary =
            RunSummary::new(directory, started_at.format(TIMESTAMP_FORMAT).to_string());
        let mut escalator = ErrorEscalator::new(self.config.error_threshold);

        let total = files.len();
        for (idx, file) in files.into_iter().enumerate() {
            let ctx = PrintCtx::new(file, &self.config.output_extension, idx + 1, total);
            log_file_start(&ctx);

            // 单个文件的任何错误都不能中断整批任务
            let outcome = match self.flow.run(&ctx, &mut self.run_log).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("{} ❌ 处理过程中发生错误: {}", ctx, e);
                    PrintOutcome::Unexpected {
                        message: e.to_string(),
                    }
                }
            };
            info!("Exiting current printing call...\n");

            summary.push(ctx.input.path().to_path_buf(), outcome.clone());

            if escalator.observe(&outcome, &mut self.operator)? == Decision::Abort {
                summary.aborted = true;
                log_aborted(&summary, total - (idx + 1));
                self.write_summary(&summary).await;
                return Ok(summary);
            }
        }

        let ended_at = self.run_log.end()?;
        summary.ended_at = Some(ended_at.format(TIMESTAMP_FORMAT).to_string());

        print_final_stats(&summary, self.run_log.path());
        self.write_summary(&summary).await;

        if let Err(e) = self.operator.alert(JOB_ENDED_MESSAGE) {
            warn!("⚠️ 无法显示结束提示: {}", e);
        }

        Ok(summary)
    }

    /// 写汇总文件（如已配置）；失败只记录警告
    async fn write_summary(&self, summary: &RunSummary) {
        let Some(path) = &self.config.summary_file else {
            return;
        };

        let writer = SummaryWriter::with_path(path);
        match writer.write(summary).await {
            Ok(()) => info!("📝 运行汇总已保存至: {}", writer.path().display()),
            Err(e) => warn!("⚠️ 写入运行汇总失败: {}", e),
        }
    }
}
