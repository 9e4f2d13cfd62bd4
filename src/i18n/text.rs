use super::Language;

/// All user-facing strings for one language.
#[derive(Debug)]
pub struct UiText {
    pub tagline: &'static str,
    /// `{language}` placeholder
    pub language_switched: &'static str,
    pub quiz: QuizText,
    pub result: ResultText,
    pub errors: ErrorText,
    pub report: ReportText,
}

#[derive(Debug)]
pub struct QuizText {
    pub title: &'static str,
    pub hero_tagline: &'static str,
    pub description: &'static str,
    pub positive_dimension: &'static str,
    pub reverse_scoring: &'static str,
    pub direct_scoring: &'static str,
    pub unanswered: &'static str,
    /// `{answered}` and `{total}` placeholders
    pub progress: &'static str,
    pub submit: &'static str,
}

#[derive(Debug)]
pub struct ResultText {
    pub profile_label: &'static str,
    pub persona_label: &'static str,
    pub no_persona: &'static str,
    pub lede: &'static str,
    pub axis_breakdown: &'static str,
    pub answer_review: &'static str,
    pub reverse_hint: &'static str,
    pub score_label: &'static str,
    pub favours_label: &'static str,
    pub first_trait_label: &'static str,
    pub second_trait_label: &'static str,
    pub answer_label: &'static str,
    pub adjusted_label: &'static str,
    pub contribution_label: &'static str,
    pub export: &'static str,
    pub start_over: &'static str,
    /// `{path}` placeholder
    pub exported: &'static str,
}

#[derive(Debug)]
pub struct ErrorText {
    /// `{missing}` placeholder: comma-separated question ids
    pub missing_questions: &'static str,
    pub incomplete_export: &'static str,
    /// `{id}` and `{value}` placeholders
    pub out_of_range: &'static str,
    /// `{id}` and `{value}` placeholders
    pub not_integer: &'static str,
    /// `{id}` placeholder
    pub duplicate_answer: &'static str,
}

#[derive(Debug)]
pub struct ReportText {
    pub title: &'static str,
    pub profile_code: &'static str,
    pub persona: &'static str,
    pub persona_sections: &'static str,
    pub axis_breakdown: &'static str,
    pub answer_summary: &'static str,
    /// `{raw}`, `{adjusted}` and `{weighted}` placeholders
    pub answer_line: &'static str,
    pub favours: &'static str,
    pub generated: &'static str,
}

/// Strings for `language`
pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::Zh => &ZH,
        Language::En => &EN,
    }
}

static ZH: UiText = UiText {
    tagline: "开发者画像测试",
    language_switched: "语言：{language}",
    quiz: QuizText {
        title: "开发者画像测评",
        hero_tagline: "测一测，你是什么类型的程序员？",
        description: "28 道题聚焦于 4 个核心维度，使用 Likert 七级量表（-3 ~ +3）。完成后即可获得匹配的角色画像与建议。",
        positive_dimension: "正向维度",
        reverse_scoring: "反向计分",
        direct_scoring: "直接计分",
        unanswered: "未作答",
        progress: "已答 {answered}/{total}",
        submit: "生成我的画像",
    },
    result: ResultText {
        profile_label: "你的画像",
        persona_label: "角色",
        no_persona: "暂未配置对应画像。",
        lede: "四大坐标系得分。正值偏向第一个特质，负值偏向第二个特质。",
        axis_breakdown: "维度拆解",
        answer_review: "答题回顾",
        reverse_hint: "🔁 表示反向计分题目。",
        score_label: "得分",
        favours_label: "倾向",
        first_trait_label: "第一特质",
        second_trait_label: "第二特质",
        answer_label: "回答",
        adjusted_label: "调整值",
        contribution_label: "贡献",
        export: "导出报告",
        start_over: "重新开始",
        exported: "报告已保存到 {path}",
    },
    errors: ErrorText {
        missing_questions: "请先回答所有题目（缺少: {missing}）。",
        incomplete_export: "无法导出报告，因为答案不完整。",
        out_of_range: "第 {id} 题的回答 {value} 超出 -3 ~ 3 范围。",
        not_integer: "第 {id} 题的回答 {value} 不是整数。",
        duplicate_answer: "第 {id} 题以不同的键重复作答。",
    },
    report: ReportText {
        title: "DevSpectrum 画像报告",
        profile_code: "画像代码",
        persona: "角色",
        persona_sections: "画像洞察",
        axis_breakdown: "维度拆解",
        answer_summary: "答题汇总",
        answer_line: "回答 {raw} · 调整值 {adjusted} · 权重 {weighted}",
        favours: "倾向",
        generated: "生成时间",
    },
};

static EN: UiText = UiText {
    tagline: "Developer Persona Test",
    language_switched: "Language: {language}",
    quiz: QuizText {
        title: "Developer Persona Assessment",
        hero_tagline: "Find out what kind of developer you are.",
        description: "28 questions across four axes using a 7-point Likert scale (-3 ~ +3). Finish to reveal your persona code and insights.",
        positive_dimension: "Positive Trait",
        reverse_scoring: "Reverse scored",
        direct_scoring: "Direct scored",
        unanswered: "unanswered",
        progress: "{answered}/{total} answered",
        submit: "Generate My Profile",
    },
    result: ResultText {
        profile_label: "Your Profile",
        persona_label: "Persona",
        no_persona: "No mapped persona for this combination yet.",
        lede: "Scores across the four axes. Positive values lean toward the first trait, negative values favor the second.",
        axis_breakdown: "Axis Breakdown",
        answer_review: "Answer Review",
        reverse_hint: "🔁 indicates a reverse-scored question.",
        score_label: "Score",
        favours_label: "Favours",
        first_trait_label: "First Trait",
        second_trait_label: "Second Trait",
        answer_label: "Answer",
        adjusted_label: "Adjusted",
        contribution_label: "Contribution",
        export: "Export report",
        start_over: "Start Over",
        exported: "Report saved to {path}",
    },
    errors: ErrorText {
        missing_questions: "Please answer every question before submitting. Missing: {missing}",
        incomplete_export: "Unable to export report because answers are incomplete.",
        out_of_range: "Question {id}: answer {value} is outside -3..3.",
        not_integer: "Question {id}: answer {value} is not an integer.",
        duplicate_answer: "Question {id}: answered more than once with different keys.",
    },
    report: ReportText {
        title: "DevSpectrum Profile Report",
        profile_code: "Profile Code",
        persona: "Persona",
        persona_sections: "Persona Insights",
        axis_breakdown: "Axis Breakdown",
        answer_summary: "Answer Summary",
        answer_line: "Answer {raw} · Adjusted {adjusted} · Weighted {weighted}",
        favours: "favours",
        generated: "Generated",
    },
};
