//! 打印流程 - 流程层
//!
//! 核心职责：定义"一张图纸"的完整处理流程
//!
//! 流程顺序：
//! 1. 输出文件已存在 → 记录 "Already printed"，结束
//! 2. 用默认程序打开图纸，失败 → 记录 "Could not open" + "NOT Printed"，结束
//! 3. 预热等待（CAD 已在运行 5 秒，冷启动 30 秒）
//! 4. 发送打印按键序列
//! 5. 校验输出文件 → "Printed" 或 "NOT Printed"（严重错误）
//! 6. 固定等待 1 秒，让 CAD 稳定后再处理下一个文件

use crate::config::{Config, Timings};
use crate::error::{AppResult, FileError};
use crate::infrastructure::{InputInjector, Launcher, ProcessProbe};
use crate::models::PrintOutcome;
use crate::services::RunLog;
use crate::workflow::print_ctx::PrintCtx;
use crate::workflow::print_sequence::{build_sequence, InjectionStep, KeyBindings};
use std::path::Path;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// 打印流程需要的设置
#[derive(Debug, Clone)]
pub struct PrintSettings {
    pub process_name: String,
    pub output_extension: String,
    pub bindings: KeyBindings,
    pub timings: Timings,
    pub wait_for_process: bool,
}

impl PrintSettings {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self {
            process_name: config.process_name.clone(),
            output_extension: config.output_extension.clone(),
            bindings: KeyBindings::from_config(config)?,
            timings: config.timings.clone(),
            wait_for_process: config.wait_for_process,
        })
    }
}

/// 打印流程
///
/// - 持有键盘、启动器、进程探测三种能力
/// - 一次只处理一个文件
/// - 只写运行日志，不决定是否继续整批任务
pub struct PrintFlow<I, L, P> {
    injector: I,
    launcher: L,
    probe: P,
    settings: PrintSettings,
}

impl<I, L, P> PrintFlow<I, L, P>
where
    I: InputInjector,
    L: Launcher,
    P: ProcessProbe,
{
    pub fn new(injector: I, launcher: L, probe: P, settings: PrintSettings) -> Self {
        Self {
            injector,
            launcher,
            probe,
            settings,
        }
    }

    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    /// 处理一个文件
    ///
    /// 返回 `Err` 时不会执行最后的稳定等待，由调用方记为意外错误。
    pub async fn run(&mut self, ctx: &PrintCtx, log: &mut RunLog) -> AppResult<PrintOutcome> {
        let outcome = self.drive(ctx, log).await?;
        sleep(self.settings.timings.settle()).await;
        Ok(outcome)
    }

    async fn drive(&mut self, ctx: &PrintCtx, log: &mut RunLog) -> AppResult<PrintOutcome> {
        let name = ctx.name();

        // ========== 1. 是否已打印 ==========
        if output_exists(&ctx.output_path).await? {
            log.info(format!("Already printed {}", name))?;
            return Ok(PrintOutcome::AlreadyPrinted);
        }

        // ========== 2. 打开图纸 ==========
        let was_running = self.probe.is_running(&self.settings.process_name);
        debug!("{} {} 已在运行: {}", ctx, self.settings.process_name, was_running);

        let exit_code = self.launcher.open(ctx.input.path()).await?;
        if exit_code != 0 {
            log.error(format!("Could not open {}", name))?;
            log.error(format!("NOT Printed {}", name))?;
            return Ok(PrintOutcome::LaunchFailed { exit_code });
        }

        // ========== 3. 预热等待 ==========
        self.warm_up(ctx, was_running).await;

        // ========== 4. 打印按键序列 ==========
        info!("Now printing file {}", name);
        let steps = build_sequence(&self.settings.bindings, &self.settings.timings, &ctx.output_name);
        self.inject(&steps).await?;

        // ========== 5. 校验输出 ==========
        if output_exists(&ctx.output_path).await? {
            log.info(format!("Printed {}", name))?;
            Ok(PrintOutcome::Printed)
        } else {
            log.critical(format!("NOT Printed {}", name))?;
            Ok(PrintOutcome::VerifyFailed)
        }
    }

    /// 等待 CAD 准备好接收按键
    ///
    /// 默认是盲等；开启 `wait_for_process` 后冷启动时轮询进程，进程出现后再等文档加载。
    async fn warm_up(&mut self, ctx: &PrintCtx, was_running: bool) {
        let timings = &self.settings.timings;

        if was_running {
            sleep(timings.warm_up_running()).await;
            return;
        }

        if !self.settings.wait_for_process {
            debug!("{} 冷启动，等待 {:?}", ctx, timings.warm_up_cold());
            sleep(timings.warm_up_cold()).await;
            return;
        }

        let deadline = Instant::now() + timings.warm_up_cold();
        loop {
            if self.probe.is_running(&self.settings.process_name) {
                debug!("{} {} 已启动", ctx, self.settings.process_name);
                sleep(timings.warm_up_running()).await;
                return;
            }
            if Instant::now() >= deadline {
                warn!(
                    "{} ⚠️ 等待 {} 启动超时 ({:?})，继续发送按键",
                    ctx,
                    self.settings.process_name,
                    timings.warm_up_cold()
                );
                return;
            }
            sleep(timings.process_poll()).await;
        }
    }

    async fn inject(&mut self, steps: &[InjectionStep]) -> AppResult<()> {
        let pause = self.settings.timings.key_pause();
        for step in steps {
            match step {
                InjectionStep::Press(chord) => {
                    self.injector.press(chord)?;
                    sleep(pause).await;
                }
                InjectionStep::Type(text) => {
                    self.injector.type_text(text)?;
                    sleep(pause).await;
                }
                InjectionStep::Wait(duration) => sleep(*duration).await,
            }
        }
        Ok(())
    }
}

async fn output_exists(path: &Path) -> AppResult<bool> {
    tokio::fs::try_exists(path).await.map_err(|source| {
        FileError::ProbeFailed {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
