//! 集成测试用的假"桌面"：记录按键和打开的文件，并模拟 CAD 生成 PDF

#![allow(dead_code)]

use dwg_print_bot::config::{Config, Timings};
use dwg_print_bot::error::{AppError, AppResult, OperatorError};
use dwg_print_bot::infrastructure::{Chord, InputInjector, Key, Launcher, Operator, ProcessProbe};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const LOGGER: &str = "DWG Printer bot V. 1.0";

/// 共享的桌面状态
#[derive(Default)]
pub struct Desktop {
    pub events: Vec<String>,
    pub opened: Vec<PathBuf>,
    /// 打开时返回非零退出码的文件名
    pub launch_failures: HashSet<String>,
    /// 打印后不会出现的输出文件名
    pub never_produce: HashSet<String>,
    /// 输入这些文本时键盘报错
    pub broken_text: HashSet<String>,
    current_dir: Option<PathBuf>,
    last_typed: Option<String>,
}

pub type SharedDesktop = Rc<RefCell<Desktop>>;

pub fn desktop() -> SharedDesktop {
    Rc::new(RefCell::new(Desktop::default()))
}

pub struct FakeInjector(pub SharedDesktop);

impl InputInjector for FakeInjector {
    fn press(&mut self, chord: &Chord) -> AppResult<()> {
        let mut desktop = self.0.borrow_mut();
        desktop.events.push(format!("press {}", chord));

        if chord.key == Key::Enter {
            let target = match (&desktop.current_dir, &desktop.last_typed) {
                (Some(dir), Some(name))
                    if name.ends_with(".pdf") && !desktop.never_produce.contains(name) =>
                {
                    Some(dir.join(name))
                }
                _ => None,
            };
            if let Some(path) = target {
                std::fs::write(path, b"%PDF-1.4").expect("写入假 PDF 失败");
            }
        }
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> AppResult<()> {
        let mut desktop = self.0.borrow_mut();
        if desktop.broken_text.contains(text) {
            return Err(AppError::send_failed(format!("输入 \"{}\"", text), "display lost"));
        }
        desktop.events.push(format!("type {}", text));
        desktop.last_typed = Some(text.to_string());
        Ok(())
    }
}

pub struct FakeLauncher(pub SharedDesktop);

impl Launcher for FakeLauncher {
    async fn open(&self, path: &Path) -> AppResult<i32> {
        let mut desktop = self.0.borrow_mut();
        desktop.opened.push(path.to_path_buf());
        desktop.current_dir = path.parent().map(Path::to_path_buf);
        desktop.last_typed = None;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(if desktop.launch_failures.contains(&name) { 1 } else { 0 })
    }
}

pub struct FakeProbe {
    pub running: bool,
}

impl ProcessProbe for FakeProbe {
    fn is_running(&mut self, _process_name: &str) -> bool {
        self.running
    }
}

/// 按预设答案回答确认框；答案用完后一律继续
#[derive(Default)]
pub struct ScriptedOperator {
    pub answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub alerts: Vec<String>,
    pub fail_dialogs: bool,
}

impl ScriptedOperator {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl Operator for ScriptedOperator {
    fn confirm(&mut self, message: &str) -> AppResult<bool> {
        self.prompts.push(message.to_string());
        if self.fail_dialogs {
            return Err(OperatorError::DialogFailed("no terminal".into()).into());
        }
        Ok(self.answers.pop_front().unwrap_or(true))
    }

    fn alert(&mut self, message: &str) -> AppResult<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }
}

/// 在 `input_dir` 中创建图纸文件
pub fn create_drawings(input_dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(input_dir.join(name), b"AC1032").expect("创建图纸失败");
    }
}

/// 测试配置：默认等待时间（测试里用暂停的时钟），日志写到 `log_dir`
pub fn test_config(input_dir: &Path, log_dir: &Path) -> Config {
    Config {
        input_dir: input_dir.to_path_buf(),
        log_file: log_dir.join("logfile.log"),
        logger_name: LOGGER.to_string(),
        timings: Timings::default(),
        ..Config::default()
    }
}

/// 读取日志文件的非空行
pub fn log_lines(log_dir: &Path) -> Vec<String> {
    std::fs::read_to_string(log_dir.join("logfile.log"))
        .expect("读取日志失败")
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
