//! Localized display labels
//!
//! Text lookup for front ends. Stage titles and LO markers are numbered so
//! they work for chains of any length.

use crate::domain::mixer::MixerMode;
use crate::domain::spectrum::BandRole;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0} (expected 'en' or 'zh')")]
pub struct ParseLanguageError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" => Ok(Language::Zh),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Every piece of text a front end may show. Stage numbers are one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    InputTitle,
    InputCenter,
    InputBandwidth,
    MixerTitle(usize),
    Mode,
    ModeName(MixerMode),
    LoFreq,
    Min,
    Max,
    ChartTitle,
    ChartDescription,
    /// First chart row: input and first image
    InputStage,
    /// Row showing the output of mixer `n`
    MixerOutputStage(usize),
    Legend(BandRole),
    LoMarker(usize),
}

impl Label {
    pub fn text(self, lang: Language) -> String {
        let (en, zh): (&str, &str) = match self {
            Label::AppTitle => ("RF Frequency Planner", "射频频率规划工具"),
            Label::InputTitle => ("Input Signal", "输入信号"),
            Label::InputCenter => ("Center Freq", "中心频率"),
            Label::InputBandwidth => ("Bandwidth", "带宽"),
            Label::MixerTitle(n) => {
                return pick(lang, format!("Mixer {n}"), format!("混频器 {n}"));
            }
            Label::Mode => ("Mode", "模式"),
            Label::ModeName(MixerMode::Bypass) => ("Thru", "直通"),
            Label::ModeName(MixerMode::Fixed) => ("Fix", "固定"),
            Label::ModeName(MixerMode::Variable) => ("Var", "可变"),
            Label::LoFreq => ("LO Freq", "本振频率"),
            Label::Min => ("Min", "最小"),
            Label::Max => ("Max", "最大"),
            Label::ChartTitle => ("Frequency Domain View", "频域视图"),
            Label::ChartDescription => (
                "Real-time spectrum analysis of up/down conversion.",
                "上下变频实时频谱分析。",
            ),
            Label::InputStage => ("Stage 1: Input & Image", "第1级：输入与镜像"),
            Label::MixerOutputStage(n) => {
                let row = n + 1;
                return pick(
                    lang,
                    format!("Stage {row}: Mixer {n} Output"),
                    format!("第{row}级：混频器{n}输出"),
                );
            }
            Label::Legend(BandRole::Input) => ("Input", "输入"),
            Label::Legend(BandRole::Image) => ("Image Warning", "镜像风险"),
            Label::Legend(BandRole::If) => ("Difference (IF)", "差频 (IF)"),
            Label::Legend(BandRole::Sum) => ("Sum", "和频"),
            Label::Legend(BandRole::Output) => ("Output", "输出"),
            Label::Legend(BandRole::Bypass) => ("Bypass", "直通"),
            Label::LoMarker(n) => {
                return pick(lang, format!("LO{n}"), format!("本振{n}"));
            }
        };

        pick(lang, en.to_string(), zh.to_string())
    }
}

fn pick(lang: Language, en: String, zh: String) -> String {
    match lang {
        Language::En => en,
        Language::Zh => zh,
    }
}
