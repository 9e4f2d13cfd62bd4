pub mod content;

pub use content::{load_content_store, ContentSection, ContentStore, PersonaContent, ResolvedContent};

use crate::i18n::{Language, DEFAULT_LANGUAGE};
use crate::scoring::ProfileCode;

/// A named archetype for one profile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub code: &'static str,
    pub title_en: &'static str,
    pub title_zh: &'static str,
}

impl Persona {
    const fn new(code: &'static str, title_en: &'static str, title_zh: &'static str) -> Self {
        Self {
            code,
            title_en,
            title_zh,
        }
    }

    /// Localized title; an empty translation falls back to the default language
    pub fn title(&self, language: Language) -> &'static str {
        let title = self.title_in(language);
        if title.is_empty() {
            self.title_in(DEFAULT_LANGUAGE)
        } else {
            title
        }
    }

    fn title_in(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.title_en,
            Language::Zh => self.title_zh,
        }
    }
}

/// All sixteen personas, keyed by profile code
pub static PERSONAS: [Persona; 16] = [
    Persona::new("RPFA", "Algorithm Engineer", "算法工程师"),
    Persona::new("QPFA", "Data Analyst", "数据分析师"),
    Persona::new("RPEA", "Algorithm Competitor", "算法竞赛人"),
    Persona::new("QPEA", "System Optimizer", "系统优化师"),
    Persona::new("RCFA", "Backend Engineer", "后端工程师"),
    Persona::new("QCFA", "Backend Architect", "后端架构师"),
    Persona::new("RCEA", "Data Miner", "数据挖掘师"),
    Persona::new("QCEA", "Backend Developer", "后端开发者"),
    Persona::new("RCFV", "Frontend CI/CD Specialist", "前端 CICD 专家"),
    Persona::new("QCFV", "Frontend Architect", "前端架构师"),
    Persona::new("RCEV", "Frontend Engineer", "前端工程师"),
    Persona::new("QCEV", "Framework Innovator", "前端框架开拓者"),
    Persona::new("RPFV", "Game Developer", "游戏开发者"),
    Persona::new("QPFV", "Game Optimizer", "游戏优化师"),
    Persona::new("RPEV", "Full-Stack Engineer", "全栈工程师"),
    Persona::new("QPEV", "Visualization Engineer", "可视化工程师"),
];

/// Persona for an exact code string. Unknown codes yield None rather than
/// an error.
pub fn find_persona(code: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.code == code)
}

/// Localized persona title for a profile code, if one is mapped
pub fn persona_title(code: &ProfileCode, language: Language) -> Option<&'static str> {
    find_persona(&code.to_string()).map(|p| p.title(language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_code_has_a_persona() {
        let codes: HashSet<&str> = PERSONAS.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), 16);
        for code in &codes {
            assert!(ProfileCode::parse(code).is_some(), "bad code {}", code);
        }
    }

    #[test]
    fn test_persona_title_localized() {
        let code = ProfileCode::parse("RPEA").unwrap();
        assert_eq!(persona_title(&code, Language::En), Some("Algorithm Competitor"));
        assert_eq!(persona_title(&code, Language::Zh), Some("算法竞赛人"));
    }

    #[test]
    fn test_unknown_code_has_no_persona() {
        assert!(find_persona("ZZZZ").is_none());
        assert!(find_persona("rpea").is_none());
    }

    #[test]
    fn test_empty_translation_falls_back_to_default_language() {
        let persona = Persona::new("RPFA", "", "算法工程师");
        assert_eq!(persona.title(Language::En), "算法工程师");
    }
}
