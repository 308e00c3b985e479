//! Scenario questions and their weighted answer options.

use serde::Serialize;

use crate::dimension::{Dimension, DimensionScores};

/// Number of options every question offers
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Intensity tier of a question, used only for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Low = 1,
    Mid = 2,
    High = 3,
}

impl Stage {
    pub fn tier(&self) -> u8 {
        *self as u8
    }
}

/// Scenario category of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Workplace,
    Social,
    SelfPerception,
    Intimacy,
    MoralGreyZone,
    StressResponse,
}

impl Category {
    pub fn label_cn(&self) -> &'static str {
        match self {
            Category::Workplace => "职场篇",
            Category::Social => "社交篇",
            Category::SelfPerception => "自我认知篇",
            Category::Intimacy => "亲密关系篇",
            Category::MoralGreyZone => "道德灰区篇",
            Category::StressResponse => "压力应激篇",
        }
    }
}

/// A selectable answer. Each option adds its weights to the respondent's
/// raw dimension totals when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Label unique within the question ("A".."D")
    pub label: &'static str,
    pub text: &'static str,
    pub weights: &'static [(Dimension, u32)],
}

impl AnswerOption {
    /// Weight this option assigns to `dimension` (zero if absent)
    pub fn weight(&self, dimension: Dimension) -> u32 {
        self.weights
            .iter()
            .filter(|(d, _)| *d == dimension)
            .map(|(_, w)| *w)
            .sum()
    }

    /// Weights spread into a full score vector
    pub fn weight_vector(&self) -> DimensionScores {
        let mut scores = DimensionScores::zero();
        for &(dimension, weight) in self.weights {
            *scores.get_mut(dimension) += weight;
        }
        scores
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub stage: Stage,
    pub category: Category,
    pub scenario: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn option(&self, label: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// The active question catalog, in presentation order
pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        stage: Stage::Low,
        category: Category::Workplace,
        scenario: "周一早会上，领导当着全组的面表扬了你的同事小李，说他上周那个方案\"非常有创意\"。但你清楚地记得，那个方案的核心思路是你在茶水间随口跟小李聊的。小李全程没提你的名字。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会在之后的会议上\"不经意\"地提起——\"对，这个思路当时我跟小李聊过\"，让所有人自己判断。",
                weights: &[(Dimension::Masking, 3), (Dimension::Control, 2)],
            },
            AnswerOption {
                label: "B",
                text: "算了，不至于为这点事撕破脸，但我以后跟他说任何想法之前都会先发邮件留痕。",
                weights: &[(Dimension::Control, 3), (Dimension::Detachment, 1)],
            },
            AnswerOption {
                label: "C",
                text: "我会私下直接找小李，语气平静但意思明确：\"下次提一嘴呗，毕竟是一起聊出来的。\"",
                weights: &[(Dimension::Aggression, 2), (Dimension::Control, 1)],
            },
            AnswerOption {
                label: "D",
                text: "无所谓，好想法我有的是，被拿走一个不影响什么。但说实话，我心里给他记了一笔。",
                weights: &[(Dimension::Detachment, 2), (Dimension::Aggression, 2)],
            },
        ],
    },
    Question {
        id: 2,
        stage: Stage::Low,
        category: Category::Social,
        scenario: "大学室友群突然活跃起来，有人发了张聚会照片。你发现所有人都去了，除了你——没有任何人通知你。群里大家在刷\"好久不见\"\"下次还约\"。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会很自然地在群里说\"哇看起来好好玩！下次叫上我呀～\"，带着笑脸面具，但心里已经准备好慢慢退群了。",
                weights: &[(Dimension::Masking, 3), (Dimension::Detachment, 2)],
            },
            AnswerOption {
                label: "B",
                text: "我直接不说话，默默把群消息免打扰。不被需要的关系，我没兴趣维护。",
                weights: &[(Dimension::Detachment, 3), (Dimension::Destruction, 1)],
            },
            AnswerOption {
                label: "C",
                text: "我会私聊关系最近的那个人问\"怎么没叫我\"，不是因为想去，是想确认我在这个圈子里到底算什么。",
                weights: &[(Dimension::Control, 2), (Dimension::Envy, 2)],
            },
            AnswerOption {
                label: "D",
                text: "说实话，看到照片的瞬间，我第一反应是看他们玩得是不是真的开心——如果过得比我好，我会更不舒服。",
                weights: &[(Dimension::Envy, 3), (Dimension::Aggression, 1)],
            },
        ],
    },
    Question {
        id: 3,
        stage: Stage::Low,
        category: Category::SelfPerception,
        scenario: "你刚完成一个自己也觉得还不错的项目，同事和领导都说\"做得好\"。但你脑海里有个声音一直在说：他们只是客气，你其实没那么厉害，下一次你肯定会露馅。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会在社交媒体上发一条低调炫耀的动态，用别人的点赞来压住心里那个声音。",
                weights: &[(Dimension::Masking, 3), (Dimension::Envy, 1)],
            },
            AnswerOption {
                label: "B",
                text: "我知道那个声音是假的，但我还是会逼自己加倍努力，确保下一次做得更完美，让任何人都挑不出毛病。",
                weights: &[(Dimension::Control, 3), (Dimension::Aggression, 1)],
            },
            AnswerOption {
                label: "C",
                text: "我会选择不去想它，把注意力转移到别的事上。感受这东西，不理它就会消失。",
                weights: &[(Dimension::Detachment, 3), (Dimension::Masking, 1)],
            },
            AnswerOption {
                label: "D",
                text: "那个声音说得可能是对的。但更让我难受的是——为什么别人就可以心安理得地接受夸奖？",
                weights: &[(Dimension::Envy, 2), (Dimension::Destruction, 2)],
            },
        ],
    },
    Question {
        id: 4,
        stage: Stage::Low,
        category: Category::Workplace,
        scenario: "公司团建，领导提议玩\"真心话大冒险\"。轮到你的时候，有人问你：\"你觉得我们组谁工作能力最差？\"所有人都看着你笑，但你知道他们也想听真话。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会笑着打太极——\"每个人都有自己擅长的嘛\"，然后迅速把话题转走。",
                weights: &[(Dimension::Masking, 3), (Dimension::Control, 2)],
            },
            AnswerOption {
                label: "B",
                text: "我心里有答案，而且我会说出来。不过我会包装成\"开玩笑\"的语气。",
                weights: &[(Dimension::Aggression, 3), (Dimension::Masking, 2)],
            },
            AnswerOption {
                label: "C",
                text: "我会说\"那肯定是我啊\"来自嘲收场。",
                weights: &[(Dimension::Control, 2), (Dimension::Masking, 2)],
            },
            AnswerOption {
                label: "D",
                text: "我觉得这种游戏本身就很无聊。我会选大冒险，或者找个理由去上厕所。",
                weights: &[(Dimension::Detachment, 3), (Dimension::Control, 1)],
            },
        ],
    },
    Question {
        id: 5,
        stage: Stage::Low,
        category: Category::Social,
        scenario: "你和朋友A约好了周末的计划，临出发前朋友A突然说\"不好意思，我跟B先约了，忘了，改天吧\"。你打开朋友圈，看到B发了和A的合照，配文是\"最佳搭档\"。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我回一句\"没事哈～\"然后立刻安排自己的独处时间。",
                weights: &[(Dimension::Detachment, 2), (Dimension::Masking, 2)],
            },
            AnswerOption {
                label: "B",
                text: "我嘴上说没事，但下次A约我的时候我一定会\"恰好有事\"。",
                weights: &[(Dimension::Aggression, 2), (Dimension::Control, 2)],
            },
            AnswerOption {
                label: "C",
                text: "我会反复看那张合照，心里在想：A到底是更喜欢B，还是更需要B？",
                weights: &[(Dimension::Envy, 3), (Dimension::Control, 1)],
            },
            AnswerOption {
                label: "D",
                text: "我会直接跟A说\"你这样让我觉得不被重视\"。",
                weights: &[(Dimension::Aggression, 2), (Dimension::Destruction, 2)],
            },
        ],
    },
    Question {
        id: 6,
        stage: Stage::Low,
        category: Category::Intimacy,
        scenario: "你的伴侣/暧昧对象跟你聊天时频繁提到一个新认识的同事，说对方\"很有趣\"\"很聪明\"。频率大概一天两三次。对方说只是普通同事关系。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我表面不动声色，但会开始更频繁地查看对方的社交动态和在线时间。",
                weights: &[(Dimension::Control, 3), (Dimension::Masking, 2)],
            },
            AnswerOption {
                label: "B",
                text: "我会开始在对方面前提起自己生活中那些有趣的人。",
                weights: &[(Dimension::Aggression, 2), (Dimension::Envy, 2)],
            },
            AnswerOption {
                label: "C",
                text: "我不会说什么，但心里已经开始做最坏的打算。",
                weights: &[(Dimension::Detachment, 3), (Dimension::Control, 1)],
            },
            AnswerOption {
                label: "D",
                text: "我会半开玩笑地说\"你是不是对人家有意思啊\"，语气轻松，但需要看到对方否认时的眼神。",
                weights: &[(Dimension::Masking, 2), (Dimension::Aggression, 2)],
            },
        ],
    },
    Question {
        id: 7,
        stage: Stage::Low,
        category: Category::MoralGreyZone,
        scenario: "你在便利店自助结账，系统出了bug，少扫了一件20块钱的东西。你发现了，周围没人注意到。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会回去重新扫码。不是因为道德感，是因为我不想让这种小事成为心里的\"污点\"。",
                weights: &[(Dimension::Control, 3), (Dimension::Masking, 1)],
            },
            AnswerOption {
                label: "B",
                text: "不管了，20块钱而已，系统的bug不是我的问题。",
                weights: &[(Dimension::Destruction, 2), (Dimension::Detachment, 2)],
            },
            AnswerOption {
                label: "C",
                text: "我会犹豫一下，然后走掉。但之后一整天会想\"如果被发现了会怎样\"。",
                weights: &[(Dimension::Masking, 2), (Dimension::Control, 2)],
            },
            AnswerOption {
                label: "D",
                text: "我会走掉，甚至会有一种微妙的爽感——\"系统有漏洞被我发现了\"。",
                weights: &[(Dimension::Destruction, 3), (Dimension::Aggression, 1)],
            },
        ],
    },
    Question {
        id: 8,
        stage: Stage::Low,
        category: Category::StressResponse,
        scenario: "连续加班两周后的一个深夜，你独自坐在工位上。领导发来消息：\"明早的汇报材料准备好了吗？\"",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会回复\"在做了，放心\"，然后灌一杯咖啡继续。",
                weights: &[(Dimension::Masking, 3), (Dimension::Control, 2)],
            },
            AnswerOption {
                label: "B",
                text: "我想把电脑合上直接走人，让所有人第二天面对一个烂摊子。",
                weights: &[(Dimension::Destruction, 3), (Dimension::Aggression, 2)],
            },
            AnswerOption {
                label: "C",
                text: "我会冷静地回复\"尽量\"，然后做到几点算几点。",
                weights: &[(Dimension::Detachment, 3), (Dimension::Aggression, 1)],
            },
            AnswerOption {
                label: "D",
                text: "我会做完，但我会在心里详细地记下每一次不合理的加班。",
                weights: &[(Dimension::Control, 3), (Dimension::Aggression, 1)],
            },
        ],
    },
    Question {
        id: 9,
        stage: Stage::Low,
        category: Category::SelfPerception,
        scenario: "你在社交媒体上看到一个和你同龄的人，做着你梦想中的工作、住着你想住的城市、过着你想要的生活。你翻完了对方最近半年的所有动态。",
        options: &[
            AnswerOption {
                label: "A",
                text: "我会告诉自己\"每个人的时区不一样\"，然后关掉手机。但接下来三天做什么都提不起劲。",
                weights: &[(Dimension::Envy, 3), (Dimension::Detachment, 1)],
            },
            AnswerOption {
                label: "B",
                text: "我会把对方的生活当成目标模板，开始分析\"我缺什么\"。",
                weights: &[(Dimension::Control, 3), (Dimension::Envy, 1)],
            },
            AnswerOption {
                label: "C",
                text: "我会忍不住想：这个人是不是有什么背景？是不是靠家里的？",
                weights: &[(Dimension::Envy, 3), (Dimension::Aggression, 1)],
            },
            AnswerOption {
                label: "D",
                text: "我会发一条精心编辑的朋友圈，展示我生活中看起来最好的那个切面。",
                weights: &[(Dimension::Masking, 3), (Dimension::Envy, 2)],
            },
        ],
    },
];
