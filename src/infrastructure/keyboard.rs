//! 键盘注入 - 基础设施层
//!
//! 持有唯一的输入设备连接，只暴露"按键 / 打字"的能力。
//! 按键发送到当前拥有焦点的窗口，不做窗口定位。

use crate::error::{AppError, AppResult, InputError};
use enigo::{Direction, Enigo, Keyboard, Settings};
use std::fmt;

/// 修饰键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

/// 普通按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Space,
    F(u8),
}

/// 组合键：若干修饰键 + 一个普通按键
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl Chord {
    /// 单个按键
    pub fn single(key: Key) -> Self {
        Self {
            modifiers: Vec::new(),
            key,
        }
    }

    /// 解析 "ctrl+p"、"ctrl+f4"、"n" 之类的快捷键字符串（不区分大小写）
    pub fn parse(binding: &str) -> AppResult<Self> {
        let parts: Vec<&str> = binding.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(AppError::invalid_hotkey(binding, "缺少按键")),
        };

        let mut modifiers = Vec::with_capacity(modifier_parts.len());
        for part in modifier_parts {
            let modifier = match part.to_lowercase().as_str() {
                "ctrl" | "control" => Modifier::Ctrl,
                "alt" => Modifier::Alt,
                "shift" => Modifier::Shift,
                "meta" | "win" | "cmd" | "super" => Modifier::Meta,
                other => {
                    return Err(AppError::invalid_hotkey(
                        binding,
                        format!("未知修饰键 '{}'", other),
                    ))
                }
            };
            modifiers.push(modifier);
        }

        let key = parse_key(key_part)
            .ok_or_else(|| AppError::invalid_hotkey(binding, format!("未知按键 '{}'", key_part)))?;

        Ok(Self { modifiers, key })
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let lower = name.to_lowercase();
    match lower.as_str() {
        "enter" | "return" => return Some(Key::Enter),
        "tab" => return Some(Key::Tab),
        "esc" | "escape" => return Some(Key::Escape),
        "space" => return Some(Key::Space),
        _ => {}
    }

    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=12).contains(&n).then_some(Key::F(n));
    }

    let mut chars = lower.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(Key::Char(c)),
        _ => None,
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            let name = match modifier {
                Modifier::Ctrl => "ctrl",
                Modifier::Alt => "alt",
                Modifier::Shift => "shift",
                Modifier::Meta => "meta",
            };
            write!(f, "{}+", name)?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "enter"),
            Key::Tab => write!(f, "tab"),
            Key::Escape => write!(f, "esc"),
            Key::Space => write!(f, "space"),
            Key::F(n) => write!(f, "f{}", n),
        }
    }
}

/// 键盘注入能力
///
/// 真实实现使用 enigo；测试中可替换为记录按键的假实现。
pub trait InputInjector {
    /// 按下并释放组合键
    fn press(&mut self, chord: &Chord) -> AppResult<()>;

    /// 逐字输入文本
    fn type_text(&mut self, text: &str) -> AppResult<()>;
}

/// 基于 enigo 的键盘注入
pub struct EnigoInjector {
    enigo: Enigo,
}

impl EnigoInjector {
    /// 连接系统输入设备
    pub fn new() -> AppResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InputError::ConnectionFailed(e.to_string()))?;
        Ok(Self { enigo })
    }

    fn send(&mut self, key: enigo::Key, direction: Direction, chord: &Chord) -> AppResult<()> {
        self.enigo
            .key(key, direction)
            .map_err(|e| AppError::send_failed(chord.to_string(), e))
    }
}

impl InputInjector for EnigoInjector {
    fn press(&mut self, chord: &Chord) -> AppResult<()> {
        for modifier in &chord.modifiers {
            self.send(to_enigo_modifier(*modifier), Direction::Press, chord)?;
        }
        let result = self.send(to_enigo_key(chord.key), Direction::Click, chord);
        // 主键失败时也要松开修饰键
        for modifier in chord.modifiers.iter().rev() {
            self.send(to_enigo_modifier(*modifier), Direction::Release, chord)?;
        }
        result
    }

    fn type_text(&mut self, text: &str) -> AppResult<()> {
        self.enigo
            .text(text)
            .map_err(|e| AppError::send_failed(format!("输入 \"{}\"", text), e))
    }
}

fn to_enigo_modifier(modifier: Modifier) -> enigo::Key {
    match modifier {
        Modifier::Ctrl => enigo::Key::Control,
        Modifier::Alt => enigo::Key::Alt,
        Modifier::Shift => enigo::Key::Shift,
        Modifier::Meta => enigo::Key::Meta,
    }
}

fn to_enigo_key(key: Key) -> enigo::Key {
    match key {
        Key::Char(c) => enigo::Key::Unicode(c),
        Key::Enter => enigo::Key::Return,
        Key::Tab => enigo::Key::Tab,
        Key::Escape => enigo::Key::Escape,
        Key::Space => enigo::Key::Space,
        Key::F(n) => match n {
            1 => enigo::Key::F1,
            2 => enigo::Key::F2,
            3 => enigo::Key::F3,
            4 => enigo::Key::F4,
            5 => enigo::Key::F5,
            6 => enigo::Key::F6,
            7 => enigo::Key::F7,
            8 => enigo::Key::F8,
            9 => enigo::Key::F9,
            10 => enigo::Key::F10,
            11 => enigo::Key::F11,
            _ => enigo::Key::F12,
        },
    }
}
