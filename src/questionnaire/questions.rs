use super::axis::{Axis, Letter};
use crate::i18n::Language;
use serde::Serialize;

/// Number of questions in the survey
pub const QUESTION_COUNT: usize = 28;

/// A single survey statement answered on the 7-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    /// Letter that receives positive scoring before reverse handling
    pub dimension: Letter,
    pub prompt_zh: &'static str,
    pub prompt_en: &'static str,
    pub reverse: bool,
}

impl Question {
    const fn new(
        id: u8,
        dimension: Letter,
        prompt_zh: &'static str,
        prompt_en: &'static str,
        reverse: bool,
    ) -> Self {
        Self {
            id,
            dimension,
            prompt_zh,
            prompt_en,
            reverse,
        }
    }

    /// Form field name ("q1" .. "q28")
    pub fn field_name(&self) -> String {
        format!("q{}", self.id)
    }

    pub fn axis(&self) -> Axis {
        self.dimension.axis()
    }

    pub fn prompt(&self, language: Language) -> &'static str {
        match language {
            Language::Zh => self.prompt_zh,
            Language::En => self.prompt_en,
        }
    }

    /// Combined reverse and orientation multiplier. `sign() * raw` is the
    /// question's contribution to its axis.
    pub fn sign(&self) -> i32 {
        let reverse = if self.reverse { -1 } else { 1 };
        reverse * self.axis().orientation(self.dimension)
    }
}

/// Look up a question by its 1-based id
pub fn question(id: u8) -> Option<&'static Question> {
    QUESTIONS.get(usize::from(id).checked_sub(1)?)
}

/// The fixed question table, ordered by id.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question::new(
        1,
        Letter::A,
        "我更喜欢通过文字或逻辑推理理解问题，而不是依赖图像或直觉。",
        "I prefer understanding problems through words or logical reasoning rather than relying on images or intuition.",
        false,
    ),
    Question::new(
        2,
        Letter::A,
        "面对复杂问题时，我习惯先从公式或算法入手，而不是画草图或图表。",
        "When facing complex problems, I usually start with formulas or algorithms rather than drawing sketches or diagrams.",
        true,
    ),
    Question::new(
        3,
        Letter::A,
        "在学习新技术时，我更注重概念和原理，而非界面或外观。",
        "When learning new technologies, I focus more on concepts and principles than on interfaces or appearance.",
        false,
    ),
    Question::new(
        4,
        Letter::A,
        "我觉得自己擅长用抽象模型来解释现实问题。",
        "I’m good at explaining real-world problems using abstract models.",
        true,
    ),
    Question::new(
        5,
        Letter::A,
        "我会被美观的界面吸引，但内心更关心底层逻辑是否合理。",
        "I may be drawn to beautiful interfaces, but I care more about whether the underlying logic makes sense.",
        false,
    ),
    Question::new(
        6,
        Letter::A,
        "我更容易记住代码结构而不是界面布局。",
        "I find it easier to remember the structure of code than the layout of interfaces.",
        true,
    ),
    Question::new(
        7,
        Letter::A,
        "我认为“好代码”应当像数学公式一样简洁优雅。",
        "I believe good code should be as concise and elegant as a mathematical formula.",
        false,
    ),
    Question::new(
        8,
        Letter::F,
        "我喜欢反复使用熟悉的工具，而不是频繁尝试新框架。",
        "I prefer reusing familiar tools rather than frequently trying new frameworks.",
        false,
    ),
    Question::new(
        9,
        Letter::E,
        "我在面对未知领域时，会感到兴奋而非焦虑。",
        "I feel excited, not anxious, when facing an unknown field.",
        true,
    ),
    Question::new(
        10,
        Letter::E,
        "我会主动寻找新的技术挑战，而不是在舒适区待太久。",
        "I actively look for new technical challenges instead of staying in my comfort zone for too long.",
        false,
    ),
    Question::new(
        11,
        Letter::F,
        "我更喜欢在稳定的项目中持续改进，而非频繁换方向。",
        "I prefer continuously improving a stable project rather than changing directions frequently.",
        true,
    ),
    Question::new(
        12,
        Letter::E,
        "学习一种新语言或新框架让我充满动力。",
        "Learning a new language or framework gives me strong motivation.",
        false,
    ),
    Question::new(
        13,
        Letter::E,
        "我倾向于在掌握细节前先大体试试，而不是等完全了解再动手。",
        "I tend to experiment before fully understanding the details, rather than waiting until I know everything.",
        true,
    ),
    Question::new(
        14,
        Letter::E,
        "对我来说，“玩一玩”新技术的乐趣比“精通”旧技术更重要。",
        "For me, the fun of “playing around” with new technology matters more than mastering old ones.",
        false,
    ),
    Question::new(
        15,
        Letter::R,
        "我更重视快速完成任务，而不是把每个细节都打磨完美。",
        "I value finishing tasks quickly rather than perfecting every detail.",
        false,
    ),
    Question::new(
        16,
        Letter::R,
        "我认为“先让它跑起来，再优化”是合理的做法。",
        "I believe “get it running first, optimize later” is a reasonable approach.",
        true,
    ),
    Question::new(
        17,
        Letter::Q,
        "我会为追求性能或精度而延迟交付。",
        "I’m willing to delay delivery to pursue better performance or precision.",
        false,
    ),
    Question::new(
        18,
        Letter::Q,
        "我宁愿慢一点，也要确保结果稳定可靠。",
        "I’d rather take more time to ensure stability and reliability.",
        true,
    ),
    Question::new(
        19,
        Letter::R,
        "我写代码时更倾向于一次实现多个小功能，而不是完美实现一个大功能。",
        "When coding, I tend to implement multiple small features rather than perfecting one big one.",
        false,
    ),
    Question::new(
        20,
        Letter::Q,
        "我认为代码的“鲁棒性”比“速度”更重要。",
        "I believe code robustness is more important than execution speed.",
        true,
    ),
    Question::new(
        21,
        Letter::R,
        "如果时间紧迫，我会优先完成整体功能而不是完美调试每个细节。",
        "When time is tight, I prioritize completing the overall functionality over perfect debugging.",
        false,
    ),
    Question::new(
        22,
        Letter::P,
        "我喜欢优化每一行代码，哪怕别人看不懂也无所谓。",
        "I like optimizing every line of code, even if others can’t easily understand it.",
        false,
    ),
    Question::new(
        23,
        Letter::P,
        "我认为高效的算法比易读的结构更重要。",
        "I think an efficient algorithm is more important than a readable structure.",
        true,
    ),
    Question::new(
        24,
        Letter::C,
        "我写代码时，优先考虑别人能否看懂。",
        "When I write code, I prioritize whether others can understand it.",
        false,
    ),
    Question::new(
        25,
        Letter::C,
        "我更愿意牺牲一点性能换取更清晰的逻辑。",
        "I’d rather sacrifice a bit of performance for clearer logic.",
        true,
    ),
    Question::new(
        26,
        Letter::P,
        "我喜欢挑战性能极限，即使可维护性下降。",
        "I enjoy pushing performance limits, even if it reduces maintainability.",
        false,
    ),
    Question::new(
        27,
        Letter::C,
        "我会为了团队协作选择规范清晰的写法，而不是最优解。",
        "For teamwork, I prefer clean, standardized code over the most optimized solution.",
        true,
    ),
    Question::new(
        28,
        Letter::C,
        "我认为“代码是给人读的，不是给机器读的”这句话很有道理。",
        "I believe the saying “Code is written for humans to read, not for machines to run” makes a lot of sense.",
        false,
    ),
];
