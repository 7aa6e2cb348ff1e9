//! Hexagram reference table: the 64 hexagrams in King Wen order and the
//! eight trigrams they are built from.
//!
//! Lines are listed bottom to top. A hexagram's lines are its lower trigram
//! followed by its upper trigram, and the 64 patterns cover all 2^6 yin/yang
//! combinations exactly once.

use serde::Serialize;

use super::lines::LineType::{self, Yang, Yin};

/// Number of hexagrams.
pub const HEXAGRAM_COUNT: usize = 64;

/// Three-line figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigram {
    /// Lookup key, e.g. `"qian"`.
    pub key: &'static str,
    pub name: &'static str,
    pub chinese: &'static str,
    pub attribute: &'static str,
    pub image: &'static str,
    pub lines: [LineType; 3],
}

/// Six-line figure with its reference text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen number, 1..=64.
    pub number: u8,
    pub name: &'static str,
    pub chinese: &'static str,
    pub pinyin: &'static str,
    /// Trigram key of lines 4–6.
    pub upper_trigram: &'static str,
    /// Trigram key of lines 1–3.
    pub lower_trigram: &'static str,
    pub judgment: &'static str,
    pub image: &'static str,
    pub lines: [LineType; 6],
}

impl Hexagram {
    /// Six-bit pattern, bit `i` set when line `i` (from the bottom) is yang.
    pub fn pattern(&self) -> u8 {
        line_pattern(&self.lines)
    }

    pub fn upper(&self) -> Option<&'static Trigram> {
        trigram_by_key(self.upper_trigram)
    }

    pub fn lower(&self) -> Option<&'static Trigram> {
        trigram_by_key(self.lower_trigram)
    }
}

pub static TRIGRAMS: [Trigram; 8] = [
    Trigram { key: "qian", name: "Qian", chinese: "乾", attribute: "Creative", image: "Heaven", lines: [Yang, Yang, Yang] },
    Trigram { key: "kun", name: "Kun", chinese: "坤", attribute: "Receptive", image: "Earth", lines: [Yin, Yin, Yin] },
    Trigram { key: "zhen", name: "Zhen", chinese: "震", attribute: "Arousing", image: "Thunder", lines: [Yang, Yin, Yin] },
    Trigram { key: "kan", name: "Kan", chinese: "坎", attribute: "Abysmal", image: "Water", lines: [Yin, Yang, Yin] },
    Trigram { key: "gen", name: "Gen", chinese: "艮", attribute: "Stillness", image: "Mountain", lines: [Yin, Yin, Yang] },
    Trigram { key: "xun", name: "Xun", chinese: "巽", attribute: "Gentle", image: "Wind/Wood", lines: [Yin, Yang, Yang] },
    Trigram { key: "li", name: "Li", chinese: "離", attribute: "Clinging", image: "Fire", lines: [Yang, Yin, Yang] },
    Trigram { key: "dui", name: "Dui", chinese: "兌", attribute: "Joyous", image: "Lake", lines: [Yang, Yang, Yin] },
];

pub static HEXAGRAMS: [Hexagram; HEXAGRAM_COUNT] = [
    Hexagram {
        number: 1,
        name: "The Creative",
        chinese: "乾",
        pinyin: "Qián",
        upper_trigram: "qian",
        lower_trigram: "qian",
        judgment: "The Creative works sublime success, furthering through perseverance.",
        image: "The movement of heaven is full of power. Thus the superior man makes himself strong and untiring.",
        lines: [Yang, Yang, Yang, Yang, Yang, Yang],
    },
    Hexagram {
        number: 2,
        name: "The Receptive",
        chinese: "坤",
        pinyin: "Kūn",
        upper_trigram: "kun",
        lower_trigram: "kun",
        judgment: "The Receptive brings about sublime success, furthering through the perseverance of a mare.",
        image: "The earth's condition is receptive devotion. Thus the superior man who has breadth of character carries the outer world.",
        lines: [Yin, Yin, Yin, Yin, Yin, Yin],
    },
    Hexagram {
        number: 3,
        name: "Difficulty at the Beginning",
        chinese: "屯",
        pinyin: "Zhūn",
        upper_trigram: "kan",
        lower_trigram: "zhen",
        judgment: "Difficulty at the Beginning works supreme success, furthering through perseverance. Nothing should be undertaken. It furthers one to appoint helpers.",
        image: "Clouds and thunder: the image of Difficulty at the Beginning. Thus the superior man brings order out of confusion.",
        lines: [Yang, Yin, Yin, Yin, Yang, Yin],
    },
    Hexagram {
        number: 4,
        name: "Youthful Folly",
        chinese: "蒙",
        pinyin: "Méng",
        upper_trigram: "gen",
        lower_trigram: "kan",
        judgment: "Youthful Folly has success. It is not I who seek the young fool; the young fool seeks me.",
        image: "A spring wells up at the foot of the mountain: the image of Youth. Thus the superior man fosters his character by thoroughness in all that he does.",
        lines: [Yin, Yang, Yin, Yin, Yin, Yang],
    },
    Hexagram {
        number: 5,
        name: "Waiting",
        chinese: "需",
        pinyin: "Xū",
        upper_trigram: "kan",
        lower_trigram: "qian",
        judgment: "Waiting. If you are sincere, you have light and success. Perseverance brings good fortune.",
        image: "Clouds rise up to heaven: the image of Waiting. Thus the superior man eats and drinks, is joyous and of good cheer.",
        lines: [Yang, Yang, Yang, Yin, Yang, Yin],
    },
    Hexagram {
        number: 6,
        name: "Conflict",
        chinese: "訟",
        pinyin: "Sòng",
        upper_trigram: "qian",
        lower_trigram: "kan",
        judgment: "Conflict. You are sincere and are being obstructed. A cautious halt halfway brings good fortune.",
        image: "Heaven and water go their opposite ways: the image of Conflict. Thus in all his transactions the superior man carefully considers the beginning.",
        lines: [Yin, Yang, Yin, Yang, Yang, Yang],
    },
    Hexagram {
        number: 7,
        name: "The Army",
        chinese: "師",
        pinyin: "Shī",
        upper_trigram: "kun",
        lower_trigram: "kan",
        judgment: "The Army. The army needs perseverance and a strong man. Good fortune without blame.",
        image: "In the middle of the earth is water: the image of the Army. Thus the superior man increases his masses by generosity toward the people.",
        lines: [Yin, Yang, Yin, Yin, Yin, Yin],
    },
    Hexagram {
        number: 8,
        name: "Holding Together",
        chinese: "比",
        pinyin: "Bǐ",
        upper_trigram: "kan",
        lower_trigram: "kun",
        judgment: "Holding Together brings good fortune. Inquire of the oracle once again whether you possess sublimity, constancy, and perseverance.",
        image: "On the earth is water: the image of Holding Together. Thus the kings of antiquity bestowed the different states as fiefs and cultivated friendly relations with the feudal lords.",
        lines: [Yin, Yin, Yin, Yin, Yang, Yin],
    },
    Hexagram {
        number: 9,
        name: "Small Taming",
        chinese: "小畜",
        pinyin: "Xiǎo Chù",
        upper_trigram: "xun",
        lower_trigram: "qian",
        judgment: "The Taming Power of the Small has success. Dense clouds, no rain from our western region.",
        image: "The wind drives across heaven: the image of the Taming Power of the Small. Thus the superior man refines the outward aspect of his nature.",
        lines: [Yang, Yang, Yang, Yin, Yang, Yang],
    },
    Hexagram {
        number: 10,
        name: "Treading",
        chinese: "履",
        pinyin: "Lǚ",
        upper_trigram: "qian",
        lower_trigram: "dui",
        judgment: "Treading upon the tail of the tiger. It does not bite the man. Success.",
        image: "Heaven above, the lake below: the image of Treading. Thus the superior man discriminates between high and low.",
        lines: [Yang, Yang, Yin, Yang, Yang, Yang],
    },
    Hexagram {
        number: 11,
        name: "Peace",
        chinese: "泰",
        pinyin: "Tài",
        upper_trigram: "kun",
        lower_trigram: "qian",
        judgment: "Peace. The small departs, the great approaches. Good fortune. Success.",
        image: "Heaven and earth unite: the image of Peace. Thus the ruler divides and completes the course of heaven and earth.",
        lines: [Yang, Yang, Yang, Yin, Yin, Yin],
    },
    Hexagram {
        number: 12,
        name: "Standstill",
        chinese: "否",
        pinyin: "Pǐ",
        upper_trigram: "qian",
        lower_trigram: "kun",
        judgment: "Standstill. Evil people do not further the perseverance of the superior man. The great departs; the small approaches.",
        image: "Heaven and earth do not unite: the image of Standstill. Thus the superior man falls back upon his inner worth.",
        lines: [Yin, Yin, Yin, Yang, Yang, Yang],
    },
    Hexagram {
        number: 13,
        name: "Fellowship",
        chinese: "同人",
        pinyin: "Tóng Rén",
        upper_trigram: "qian",
        lower_trigram: "li",
        judgment: "Fellowship with Men in the open. Success. It furthers one to cross the great water.",
        image: "Heaven together with fire: the image of Fellowship with Men. Thus the superior man organizes the clans and makes distinctions between things.",
        lines: [Yang, Yin, Yang, Yang, Yang, Yang],
    },
    Hexagram {
        number: 14,
        name: "Great Possession",
        chinese: "大有",
        pinyin: "Dà Yǒu",
        upper_trigram: "li",
        lower_trigram: "qian",
        judgment: "Possession in Great Measure. Supreme success.",
        image: "Fire in heaven above: the image of Possession in Great Measure. Thus the superior man curbs evil and furthers good.",
        lines: [Yang, Yang, Yang, Yang, Yin, Yang],
    },
    Hexagram {
        number: 15,
        name: "Modesty",
        chinese: "謙",
        pinyin: "Qiān",
        upper_trigram: "kun",
        lower_trigram: "gen",
        judgment: "Modesty creates success. The superior man carries things through.",
        image: "Within the earth, a mountain: the image of Modesty. Thus the superior man reduces that which is too much, and augments that which is too little.",
        lines: [Yin, Yin, Yang, Yin, Yin, Yin],
    },
    Hexagram {
        number: 16,
        name: "Enthusiasm",
        chinese: "豫",
        pinyin: "Yù",
        upper_trigram: "zhen",
        lower_trigram: "kun",
        judgment: "Enthusiasm. It furthers one to install helpers and to set armies marching.",
        image: "Thunder comes resounding out of the earth: the image of Enthusiasm. Thus the ancient kings made music in order to honor merit.",
        lines: [Yin, Yin, Yin, Yang, Yin, Yin],
    },
    Hexagram {
        number: 17,
        name: "Following",
        chinese: "隨",
        pinyin: "Suí",
        upper_trigram: "dui",
        lower_trigram: "zhen",
        judgment: "Following has supreme success. Perseverance furthers. No blame.",
        image: "Thunder in the middle of the lake: the image of Following. Thus the superior man at nightfall goes indoors for rest and recuperation.",
        lines: [Yang, Yin, Yin, Yang, Yang, Yin],
    },
    Hexagram {
        number: 18,
        name: "Work on the Decayed",
        chinese: "蠱",
        pinyin: "Gǔ",
        upper_trigram: "gen",
        lower_trigram: "xun",
        judgment: "Work on what has been spoiled has supreme success. It furthers one to cross the great water.",
        image: "The wind blows low on the mountain: the image of Decay. Thus the superior man stirs up the people and strengthens their spirit.",
        lines: [Yin, Yang, Yang, Yin, Yin, Yang],
    },
    Hexagram {
        number: 19,
        name: "Approach",
        chinese: "臨",
        pinyin: "Lín",
        upper_trigram: "kun",
        lower_trigram: "dui",
        judgment: "Approach has supreme success. Perseverance furthers. When the eighth month comes, there will be misfortune.",
        image: "The earth above the lake: the image of Approach. Thus the superior man is inexhaustible in his will to teach.",
        lines: [Yang, Yang, Yin, Yin, Yin, Yin],
    },
    Hexagram {
        number: 20,
        name: "Contemplation",
        chinese: "觀",
        pinyin: "Guān",
        upper_trigram: "xun",
        lower_trigram: "kun",
        judgment: "Contemplation. The ablution has been made, but not yet the offering. Full of trust they look up to him.",
        image: "The wind blows over the earth: the image of Contemplation. Thus the kings of old visited the regions of the world, contemplated the people, and gave them instruction.",
        lines: [Yin, Yin, Yin, Yin, Yang, Yang],
    },
    Hexagram {
        number: 21,
        name: "Biting Through",
        chinese: "噬嗑",
        pinyin: "Shì Kè",
        upper_trigram: "li",
        lower_trigram: "zhen",
        judgment: "Biting Through has success. It is favorable to let justice be administered.",
        image: "Thunder and lightning: the image of Biting Through. Thus the kings of former times made firm the laws through clearly defined penalties.",
        lines: [Yang, Yin, Yin, Yang, Yin, Yang],
    },
    Hexagram {
        number: 22,
        name: "Grace",
        chinese: "賁",
        pinyin: "Bì",
        upper_trigram: "gen",
        lower_trigram: "li",
        judgment: "Grace has success. In small matters it is favorable to undertake something.",
        image: "Fire at the foot of the mountain: the image of Grace. Thus does the superior man proceed when clearing up current affairs.",
        lines: [Yang, Yin, Yang, Yin, Yin, Yang],
    },
    Hexagram {
        number: 23,
        name: "Splitting Apart",
        chinese: "剝",
        pinyin: "Bō",
        upper_trigram: "gen",
        lower_trigram: "kun",
        judgment: "Splitting Apart. It does not further one to go anywhere.",
        image: "The mountain rests on the earth: the image of Splitting Apart. Thus those above can ensure their position only by giving generously to those below.",
        lines: [Yin, Yin, Yin, Yin, Yin, Yang],
    },
    Hexagram {
        number: 24,
        name: "Return",
        chinese: "復",
        pinyin: "Fù",
        upper_trigram: "kun",
        lower_trigram: "zhen",
        judgment: "Return. Success. Going out and coming in without error. Friends come without blame.",
        image: "Thunder within the earth: the image of the Turning Point. Thus the kings of antiquity closed the passes at the time of solstice.",
        lines: [Yang, Yin, Yin, Yin, Yin, Yin],
    },
    Hexagram {
        number: 25,
        name: "Innocence",
        chinese: "無妄",
        pinyin: "Wú Wàng",
        upper_trigram: "qian",
        lower_trigram: "zhen",
        judgment: "Innocence. Supreme success. Perseverance furthers. If someone is not as he should be, he has misfortune.",
        image: "Under heaven thunder rolls: all things attain the natural state of innocence. Thus the kings of old, rich in virtue and in harmony with the time, fostered and nourished all beings.",
        lines: [Yang, Yin, Yin, Yang, Yang, Yang],
    },
    Hexagram {
        number: 26,
        name: "Great Taming",
        chinese: "大畜",
        pinyin: "Dà Chù",
        upper_trigram: "gen",
        lower_trigram: "qian",
        judgment: "The Taming Power of the Great. Perseverance furthers. Not eating at home brings good fortune.",
        image: "Heaven within the mountain: the image of the Taming Power of the Great. Thus the superior man acquaints himself with many sayings of antiquity.",
        lines: [Yang, Yang, Yang, Yin, Yin, Yang],
    },
    Hexagram {
        number: 27,
        name: "Nourishment",
        chinese: "頤",
        pinyin: "Yí",
        upper_trigram: "gen",
        lower_trigram: "zhen",
        judgment: "The Corners of the Mouth. Perseverance brings good fortune. Pay heed to the providing of nourishment.",
        image: "At the foot of the mountain, thunder: the image of Providing Nourishment. Thus the superior man is careful of his words and temperate in eating and drinking.",
        lines: [Yang, Yin, Yin, Yin, Yin, Yang],
    },
    Hexagram {
        number: 28,
        name: "Great Excess",
        chinese: "大過",
        pinyin: "Dà Guò",
        upper_trigram: "dui",
        lower_trigram: "xun",
        judgment: "Preponderance of the Great. The ridgepole sags to the breaking point. It furthers one to have somewhere to go.",
        image: "The lake rises above the trees: the image of Preponderance of the Great. Thus the superior man, when he stands alone, is unconcerned.",
        lines: [Yin, Yang, Yang, Yang, Yang, Yin],
    },
    Hexagram {
        number: 29,
        name: "The Abysmal",
        chinese: "坎",
        pinyin: "Kǎn",
        upper_trigram: "kan",
        lower_trigram: "kan",
        judgment: "The Abysmal repeated. If you are sincere, you have success in your heart, and whatever you do succeeds.",
        image: "Water flows on and reaches the goal: the image of the Abysmal repeated. Thus the superior man walks in lasting virtue and carries on the business of teaching.",
        lines: [Yin, Yang, Yin, Yin, Yang, Yin],
    },
    Hexagram {
        number: 30,
        name: "The Clinging",
        chinese: "離",
        pinyin: "Lí",
        upper_trigram: "li",
        lower_trigram: "li",
        judgment: "The Clinging. Perseverance furthers. It brings success. Care of the cow brings good fortune.",
        image: "That which is bright rises twice: the image of Fire. Thus the great man, by perpetuating this brightness, illumines the four quarters of the world.",
        lines: [Yang, Yin, Yang, Yang, Yin, Yang],
    },
    Hexagram {
        number: 31,
        name: "Influence",
        chinese: "咸",
        pinyin: "Xián",
        upper_trigram: "dui",
        lower_trigram: "gen",
        judgment: "Influence. Success. Perseverance furthers. To take a maiden to wife brings good fortune.",
        image: "A lake on the mountain: the image of Influence. Thus the superior man encourages people to approach him by his readiness to receive them.",
        lines: [Yin, Yin, Yang, Yang, Yang, Yin],
    },
    Hexagram {
        number: 32,
        name: "Duration",
        chinese: "恆",
        pinyin: "Héng",
        upper_trigram: "zhen",
        lower_trigram: "xun",
        judgment: "Duration. Success. No blame. Perseverance furthers. It furthers one to have somewhere to go.",
        image: "Thunder and wind: the image of Duration. Thus the superior man stands firm and does not change his direction.",
        lines: [Yin, Yang, Yang, Yang, Yin, Yin],
    },
    Hexagram {
        number: 33,
        name: "Retreat",
        chinese: "遯",
        pinyin: "Dùn",
        upper_trigram: "qian",
        lower_trigram: "gen",
        judgment: "Retreat. Success. In what is small, perseverance furthers.",
        image: "Mountain under heaven: the image of Retreat. Thus the superior man keeps the inferior man at a distance, not angrily but with reserve.",
        lines: [Yin, Yin, Yang, Yang, Yang, Yang],
    },
    Hexagram {
        number: 34,
        name: "Great Power",
        chinese: "大壯",
        pinyin: "Dà Zhuàng",
        upper_trigram: "zhen",
        lower_trigram: "qian",
        judgment: "The Power of the Great. Perseverance furthers.",
        image: "Thunder in heaven above: the image of the Power of the Great. Thus the superior man does not tread upon paths that do not accord with established order.",
        lines: [Yang, Yang, Yang, Yang, Yin, Yin],
    },
    Hexagram {
        number: 35,
        name: "Progress",
        chinese: "晉",
        pinyin: "Jìn",
        upper_trigram: "li",
        lower_trigram: "kun",
        judgment: "Progress. The powerful prince is honored with horses in large numbers. In a single day he is granted audience three times.",
        image: "The sun rises over the earth: the image of Progress. Thus the superior man himself brightens his bright virtue.",
        lines: [Yin, Yin, Yin, Yang, Yin, Yang],
    },
    Hexagram {
        number: 36,
        name: "Darkening of the Light",
        chinese: "明夷",
        pinyin: "Míng Yí",
        upper_trigram: "kun",
        lower_trigram: "li",
        judgment: "Darkening of the Light. In adversity it furthers one to be persevering.",
        image: "The light has sunk into the earth: the image of Darkening of the Light. Thus does the superior man live with the great mass: he veils his light, yet still shines.",
        lines: [Yang, Yin, Yang, Yin, Yin, Yin],
    },
    Hexagram {
        number: 37,
        name: "The Family",
        chinese: "家人",
        pinyin: "Jiā Rén",
        upper_trigram: "xun",
        lower_trigram: "li",
        judgment: "The Family. The perseverance of the woman furthers.",
        image: "Wind comes forth from fire: the image of the Family. Thus the superior man has substance in his words and duration in his way of life.",
        lines: [Yang, Yin, Yang, Yin, Yang, Yang],
    },
    Hexagram {
        number: 38,
        name: "Opposition",
        chinese: "睽",
        pinyin: "Kuí",
        upper_trigram: "li",
        lower_trigram: "dui",
        judgment: "Opposition. In small matters, good fortune.",
        image: "Above, fire; below, the lake: the image of Opposition. Thus amid all fellowship the superior man retains his individuality.",
        lines: [Yang, Yang, Yin, Yang, Yin, Yang],
    },
    Hexagram {
        number: 39,
        name: "Obstruction",
        chinese: "蹇",
        pinyin: "Jiǎn",
        upper_trigram: "kan",
        lower_trigram: "gen",
        judgment: "Obstruction. The southwest furthers. The northeast does not further. It furthers one to see the great man.",
        image: "Water on the mountain: the image of Obstruction. Thus the superior man turns his attention to himself and molds his character.",
        lines: [Yin, Yin, Yang, Yin, Yang, Yin],
    },
    Hexagram {
        number: 40,
        name: "Deliverance",
        chinese: "解",
        pinyin: "Xiè",
        upper_trigram: "zhen",
        lower_trigram: "kan",
        judgment: "Deliverance. The southwest furthers. If there is no longer anything where one has to go, return brings good fortune.",
        image: "Thunder and rain set in: the image of Deliverance. Thus the superior man pardons mistakes and forgives misdeeds.",
        lines: [Yin, Yang, Yin, Yang, Yin, Yin],
    },
    Hexagram {
        number: 41,
        name: "Decrease",
        chinese: "損",
        pinyin: "Sǔn",
        upper_trigram: "gen",
        lower_trigram: "dui",
        judgment: "Decrease combined with sincerity brings about supreme good fortune without blame. One may be persevering in this.",
        image: "At the foot of the mountain, the lake: the image of Decrease. Thus the superior man controls his anger and restrains his instincts.",
        lines: [Yang, Yang, Yin, Yin, Yin, Yang],
    },
    Hexagram {
        number: 42,
        name: "Increase",
        chinese: "益",
        pinyin: "Yì",
        upper_trigram: "xun",
        lower_trigram: "zhen",
        judgment: "Increase. It furthers one to undertake something. It furthers one to cross the great water.",
        image: "Wind and thunder: the image of Increase. Thus the superior man: if he sees good, he imitates it; if he has faults, he rids himself of them.",
        lines: [Yang, Yin, Yin, Yin, Yang, Yang],
    },
    Hexagram {
        number: 43,
        name: "Breakthrough",
        chinese: "夬",
        pinyin: "Guài",
        upper_trigram: "dui",
        lower_trigram: "qian",
        judgment: "Breakthrough. One must resolutely make the matter known at the court of the king. It must be announced truthfully. Danger.",
        image: "The lake has risen up to heaven: the image of Breakthrough. Thus the superior man dispenses riches downward and refrains from resting on his virtue.",
        lines: [Yang, Yang, Yang, Yang, Yang, Yin],
    },
    Hexagram {
        number: 44,
        name: "Coming to Meet",
        chinese: "姤",
        pinyin: "Gòu",
        upper_trigram: "qian",
        lower_trigram: "xun",
        judgment: "Coming to Meet. The maiden is powerful. One should not marry such a maiden.",
        image: "Under heaven, wind: the image of Coming to Meet. Thus does the prince act when disseminating his commands and proclaiming them to the four quarters of heaven.",
        lines: [Yin, Yang, Yang, Yang, Yang, Yang],
    },
    Hexagram {
        number: 45,
        name: "Gathering Together",
        chinese: "萃",
        pinyin: "Cuì",
        upper_trigram: "dui",
        lower_trigram: "kun",
        judgment: "Gathering Together. Success. The king approaches his temple. It furthers one to see the great man.",
        image: "Over the earth, the lake: the image of Gathering Together. Thus the superior man renews his weapons in order to meet the unforeseen.",
        lines: [Yin, Yin, Yin, Yang, Yang, Yin],
    },
    Hexagram {
        number: 46,
        name: "Pushing Upward",
        chinese: "升",
        pinyin: "Shēng",
        upper_trigram: "kun",
        lower_trigram: "xun",
        judgment: "Pushing Upward has supreme success. One must see the great man. Fear not. Departure toward the south brings good fortune.",
        image: "Within the earth, wood grows: the image of Pushing Upward. Thus the superior man of devoted character heaps up small things in order to achieve something high and great.",
        lines: [Yin, Yang, Yang, Yin, Yin, Yin],
    },
    Hexagram {
        number: 47,
        name: "Oppression",
        chinese: "困",
        pinyin: "Kùn",
        upper_trigram: "dui",
        lower_trigram: "kan",
        judgment: "Oppression. Success. Perseverance. The great man brings about good fortune. No blame. When one has something to say, it is not believed.",
        image: "There is no water in the lake: the image of Exhaustion. Thus the superior man stakes his life on following his will.",
        lines: [Yin, Yang, Yin, Yang, Yang, Yin],
    },
    Hexagram {
        number: 48,
        name: "The Well",
        chinese: "井",
        pinyin: "Jǐng",
        upper_trigram: "kan",
        lower_trigram: "xun",
        judgment: "The Well. The town may be changed, but the well cannot be changed. It neither decreases nor increases.",
        image: "Water over wood: the image of the Well. Thus the superior man encourages the people at their work and exhorts them to help one another.",
        lines: [Yin, Yang, Yang, Yin, Yang, Yin],
    },
    Hexagram {
        number: 49,
        name: "Revolution",
        chinese: "革",
        pinyin: "Gé",
        upper_trigram: "dui",
        lower_trigram: "li",
        judgment: "Revolution. On your own day you are believed. Supreme success, furthering through perseverance. Remorse disappears.",
        image: "Fire in the lake: the image of Revolution. Thus the superior man sets the calendar in order and makes the seasons clear.",
        lines: [Yang, Yin, Yang, Yang, Yang, Yin],
    },
    Hexagram {
        number: 50,
        name: "The Cauldron",
        chinese: "鼎",
        pinyin: "Dǐng",
        upper_trigram: "li",
        lower_trigram: "xun",
        judgment: "The Cauldron. Supreme good fortune. Success.",
        image: "Fire over wood: the image of the Cauldron. Thus the superior man consolidates his fate by making his position correct.",
        lines: [Yin, Yang, Yang, Yang, Yin, Yang],
    },
    Hexagram {
        number: 51,
        name: "The Arousing",
        chinese: "震",
        pinyin: "Zhèn",
        upper_trigram: "zhen",
        lower_trigram: "zhen",
        judgment: "Shock brings success. Shock comes—oh, oh! Laughing words—ha, ha! The shock terrifies for a hundred miles.",
        image: "Thunder repeated: the image of Shock. Thus in fear and trembling the superior man sets his life in order and examines himself.",
        lines: [Yang, Yin, Yin, Yang, Yin, Yin],
    },
    Hexagram {
        number: 52,
        name: "Keeping Still",
        chinese: "艮",
        pinyin: "Gèn",
        upper_trigram: "gen",
        lower_trigram: "gen",
        judgment: "Keeping Still. Keeping his back still so that he no longer feels his body. He goes into his courtyard and does not see his people. No blame.",
        image: "Mountains standing close together: the image of Keeping Still. Thus the superior man does not permit his thoughts to go beyond his situation.",
        lines: [Yin, Yin, Yang, Yin, Yin, Yang],
    },
    Hexagram {
        number: 53,
        name: "Development",
        chinese: "漸",
        pinyin: "Jiàn",
        upper_trigram: "xun",
        lower_trigram: "gen",
        judgment: "Development. The maiden is given in marriage. Good fortune. Perseverance furthers.",
        image: "On the mountain, a tree: the image of Development. Thus the superior man abides in dignity and virtue, in order to improve the mores.",
        lines: [Yin, Yin, Yang, Yin, Yang, Yang],
    },
    Hexagram {
        number: 54,
        name: "The Marrying Maiden",
        chinese: "歸妹",
        pinyin: "Guī Mèi",
        upper_trigram: "zhen",
        lower_trigram: "dui",
        judgment: "The Marrying Maiden. Undertakings bring misfortune. Nothing that would further.",
        image: "Thunder over the lake: the image of the Marrying Maiden. Thus the superior man understands the transitory in the light of the eternity of the end.",
        lines: [Yang, Yang, Yin, Yang, Yin, Yin],
    },
    Hexagram {
        number: 55,
        name: "Abundance",
        chinese: "豐",
        pinyin: "Fēng",
        upper_trigram: "zhen",
        lower_trigram: "li",
        judgment: "Abundance has success. The king attains abundance. Be not sad. Be like the sun at midday.",
        image: "Both thunder and lightning come: the image of Abundance. Thus the superior man decides lawsuits and carries out punishments.",
        lines: [Yang, Yin, Yang, Yang, Yin, Yin],
    },
    Hexagram {
        number: 56,
        name: "The Wanderer",
        chinese: "旅",
        pinyin: "Lǚ",
        upper_trigram: "li",
        lower_trigram: "gen",
        judgment: "The Wanderer. Success through smallness. Perseverance brings good fortune to the wanderer.",
        image: "Fire on the mountain: the image of the Wanderer. Thus the superior man is clear-minded and cautious in imposing penalties, and protracts no lawsuits.",
        lines: [Yin, Yin, Yang, Yang, Yin, Yang],
    },
    Hexagram {
        number: 57,
        name: "The Gentle",
        chinese: "巽",
        pinyin: "Xùn",
        upper_trigram: "xun",
        lower_trigram: "xun",
        judgment: "The Gentle. Success through what is small. It furthers one to have somewhere to go. It furthers one to see the great man.",
        image: "Winds following one upon the other: the image of the Gently Penetrating. Thus the superior man spreads his commands abroad and carries out his undertakings.",
        lines: [Yin, Yang, Yang, Yin, Yang, Yang],
    },
    Hexagram {
        number: 58,
        name: "The Joyous",
        chinese: "兌",
        pinyin: "Duì",
        upper_trigram: "dui",
        lower_trigram: "dui",
        judgment: "The Joyous. Success. Perseverance is favorable.",
        image: "Lakes resting one on the other: the image of the Joyous. Thus the superior man joins with his friends for discussion and practice.",
        lines: [Yang, Yang, Yin, Yang, Yang, Yin],
    },
    Hexagram {
        number: 59,
        name: "Dispersion",
        chinese: "渙",
        pinyin: "Huàn",
        upper_trigram: "xun",
        lower_trigram: "kan",
        judgment: "Dispersion. Success. The king approaches his temple. It furthers one to cross the great water. Perseverance furthers.",
        image: "The wind drives over the water: the image of Dispersion. Thus the kings of old sacrificed to the Lord and built temples.",
        lines: [Yin, Yang, Yin, Yin, Yang, Yang],
    },
    Hexagram {
        number: 60,
        name: "Limitation",
        chinese: "節",
        pinyin: "Jié",
        upper_trigram: "kan",
        lower_trigram: "dui",
        judgment: "Limitation. Success. Galling limitation must not be persevered in.",
        image: "Water over lake: the image of Limitation. Thus the superior man creates number and measure, and examines the nature of virtue and correct conduct.",
        lines: [Yang, Yang, Yin, Yin, Yang, Yin],
    },
    Hexagram {
        number: 61,
        name: "Inner Truth",
        chinese: "中孚",
        pinyin: "Zhōng Fú",
        upper_trigram: "xun",
        lower_trigram: "dui",
        judgment: "Inner Truth. Pigs and fishes. Good fortune. It furthers one to cross the great water. Perseverance furthers.",
        image: "Wind over lake: the image of Inner Truth. Thus the superior man discusses criminal cases in order to delay executions.",
        lines: [Yang, Yang, Yin, Yin, Yang, Yang],
    },
    Hexagram {
        number: 62,
        name: "Small Excess",
        chinese: "小過",
        pinyin: "Xiǎo Guò",
        upper_trigram: "zhen",
        lower_trigram: "gen",
        judgment: "Preponderance of the Small. Success. Perseverance furthers. Small things may be done; great things should not be done.",
        image: "Thunder on the mountain: the image of Preponderance of the Small. Thus in his conduct the superior man gives preponderance to reverence.",
        lines: [Yin, Yin, Yang, Yang, Yin, Yin],
    },
    Hexagram {
        number: 63,
        name: "After Completion",
        chinese: "既濟",
        pinyin: "Jì Jì",
        upper_trigram: "kan",
        lower_trigram: "li",
        judgment: "After Completion. Success in small matters. Perseverance furthers. At the beginning good fortune, at the end disorder.",
        image: "Water over fire: the image of the condition in After Completion. Thus the superior man takes thought of misfortune and arms himself against it in advance.",
        lines: [Yang, Yin, Yang, Yin, Yang, Yin],
    },
    Hexagram {
        number: 64,
        name: "Before Completion",
        chinese: "未濟",
        pinyin: "Wèi Jì",
        upper_trigram: "li",
        lower_trigram: "kan",
        judgment: "Before Completion. Success. But if the little fox, after nearly completing the crossing, gets his tail in the water, there is nothing that would further.",
        image: "Fire over water: the image of the condition before transition. Thus the superior man is careful in the differentiation of things, so that each finds its place.",
        lines: [Yin, Yang, Yin, Yang, Yin, Yang],
    },];

/// Six-bit pattern for a set of lines, bit `i` set when line `i` is yang.
pub fn line_pattern(lines: &[LineType; 6]) -> u8 {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| **l == Yang)
        .fold(0u8, |acc, (i, _)| acc | (1 << i))
}

/// Hexagram whose lines match exactly.
pub fn hexagram_by_lines(lines: [LineType; 6]) -> Option<&'static Hexagram> {
    HEXAGRAMS.iter().find(|h| h.lines == lines)
}

/// Hexagram by King Wen number.
pub fn hexagram_by_number(number: u8) -> Option<&'static Hexagram> {
    HEXAGRAMS.iter().find(|h| h.number == number)
}

/// Hexagram reached by flipping every line marked in `changing`.
pub fn transformed_hexagram(
    original: &Hexagram,
    changing: [bool; 6],
) -> Option<&'static Hexagram> {
    let mut lines = original.lines;
    for (line, flip) in lines.iter_mut().zip(changing) {
        if flip {
            *line = line.flipped();
        }
    }
    hexagram_by_lines(lines)
}

pub fn trigram_by_key(key: &str) -> Option<&'static Trigram> {
    TRIGRAMS.iter().find(|t| t.key == key)
}

pub fn trigram_from_lines(lines: [LineType; 3]) -> Option<&'static Trigram> {
    TRIGRAMS.iter().find(|t| t.lines == lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_from_pattern(pattern: u8) -> [LineType; 6] {
        std::array::from_fn(|i| if pattern >> i & 1 == 1 { Yang } else { Yin })
    }

    #[test]
    fn king_wen_order() {
        for (i, h) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(h.number as usize, i + 1);
        }
    }

    #[test]
    fn every_hexagram_found_by_its_lines() {
        for h in &HEXAGRAMS {
            let found = hexagram_by_lines(h.lines).unwrap();
            assert_eq!(found.number, h.number);
        }
    }

    #[test]
    fn patterns_are_a_bijection() {
        let mut seen = [false; 64];
        for pattern in 0..64u8 {
            let h = hexagram_by_lines(lines_from_pattern(pattern))
                .unwrap_or_else(|| panic!("no hexagram for {pattern:06b}"));
            assert_eq!(h.pattern(), pattern);
            assert!(!seen[h.number as usize - 1], "#{} matched twice", h.number);
            seen[h.number as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn trigrams_compose_hexagram() {
        for h in &HEXAGRAMS {
            let lower = h.lower().unwrap();
            let upper = h.upper().unwrap();
            assert_eq!(&h.lines[..3], &lower.lines[..], "#{} lower", h.number);
            assert_eq!(&h.lines[3..], &upper.lines[..], "#{} upper", h.number);
            assert_eq!(trigram_from_lines(lower.lines).map(|t| t.key), Some(h.lower_trigram));
        }
    }

    #[test]
    fn well_known_hexagrams() {
        assert_eq!(hexagram_by_lines([Yang; 6]).unwrap().name, "The Creative");
        assert_eq!(hexagram_by_lines([Yin; 6]).unwrap().name, "The Receptive");
        let before = hexagram_by_lines([Yin, Yang, Yin, Yang, Yin, Yang]).unwrap();
        assert_eq!(before.number, 64);
        let after = hexagram_by_lines([Yang, Yin, Yang, Yin, Yang, Yin]).unwrap();
        assert_eq!(after.number, 63);
    }

    #[test]
    fn number_lookup() {
        assert_eq!(hexagram_by_number(1).unwrap().pinyin, "Qián");
        assert!(hexagram_by_number(0).is_none());
        assert!(hexagram_by_number(65).is_none());
    }

    #[test]
    fn flipping_twice_is_identity() {
        let changing = [true, false, true, true, false, false];
        for h in &HEXAGRAMS {
            let once = transformed_hexagram(h, changing).unwrap();
            let twice = transformed_hexagram(once, changing).unwrap();
            assert_eq!(twice.number, h.number);
        }
    }

    #[test]
    fn flipping_nothing_is_identity() {
        for h in &HEXAGRAMS {
            assert_eq!(transformed_hexagram(h, [false; 6]).unwrap().number, h.number);
        }
    }

    #[test]
    fn flipping_all_complements() {
        assert_eq!(transformed_hexagram(&HEXAGRAMS[0], [true; 6]).unwrap().number, 2);
        assert_eq!(transformed_hexagram(&HEXAGRAMS[62], [true; 6]).unwrap().number, 64);
    }
}
