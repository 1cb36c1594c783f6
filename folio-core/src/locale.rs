//! Per-language word tables for the fake book generator

use crate::book::Language;

pub(crate) struct LocaleData {
    pub titles: &'static [&'static str],
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    /// Family name written before the given name, without a space
    pub family_name_first: bool,
    /// `{a}` and `{b}` are replaced with two family names
    pub publisher_formats: &'static [&'static str],
    pub lorem_words: &'static [&'static str],
    pub word_separator: &'static str,
    pub sentence_end: &'static str,
    /// ISBN registration group
    pub isbn_group: u8,
    /// Mixed into the generation seed so languages don't share a stream
    pub salt: u64,
}

pub(crate) fn locale(language: Language) -> &'static LocaleData {
    match language {
        Language::En => &EN,
        Language::De => &DE,
        Language::Ja => &JA,
    }
}

static EN: LocaleData = LocaleData {
    titles: &[
        "The Silent Echo",
        "Beyond the Horizon",
        "Whispers of Time",
        "Eternal Dreams",
        "The Last Chapter",
        "A Garden of Glass",
        "The Cartographer's Daughter",
        "Salt and Iron",
        "Winter in the North",
        "The Quiet Orchard",
    ],
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
        "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore",
        "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis",
    ],
    family_name_first: false,
    publisher_formats: &[
        "{a} Inc",
        "{a} and Sons",
        "{a} LLC",
        "{a} Group",
        "{a} - {b}",
        "{a}, {b} and Co",
    ],
    lorem_words: &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
        "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco",
        "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat",
    ],
    word_separator: " ",
    sentence_end: ".",
    isbn_group: 1,
    salt: 0x656e_0000_0000_0001,
};

static DE: LocaleData = LocaleData {
    titles: &[
        "Das stille Echo",
        "Jenseits des Horizonts",
        "Flüstern der Zeit",
        "Ewige Träume",
        "Das letzte Kapitel",
        "Ein Garten aus Glas",
        "Die Tochter des Kartografen",
        "Salz und Eisen",
        "Winter im Norden",
        "Der stille Obstgarten",
    ],
    first_names: &[
        "Lukas", "Anna", "Leon", "Marie", "Finn", "Sophie", "Jonas", "Emma", "Paul", "Mia",
        "Felix", "Hannah", "Maximilian", "Lena", "Elias", "Lea", "Noah", "Clara", "Ben",
        "Johanna", "Moritz", "Greta", "Jakob", "Frieda",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
        "Schröder", "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann",
    ],
    family_name_first: false,
    publisher_formats: &[
        "{a} GmbH",
        "{a} AG",
        "{a} KG",
        "{a} & {b} GmbH",
        "{a}-{b} Verlag",
        "{a} Verlag",
    ],
    lorem_words: &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consetetur", "sadipscing", "elitr", "sed",
        "diam", "nonumy", "eirmod", "tempor", "invidunt", "ut", "labore", "et", "dolore",
        "magna", "aliquyam", "erat", "voluptua", "at", "vero", "eos", "accusam", "justo", "duo",
        "dolores", "ea", "rebum", "stet", "clita", "kasd", "gubergren",
    ],
    word_separator: " ",
    sentence_end: ".",
    isbn_group: 3,
    salt: 0x6465_0000_0000_0002,
};

static JA: LocaleData = LocaleData {
    titles: &[
        "静かな反響",
        "地平線の向こう",
        "時のささやき",
        "永遠の夢",
        "最後の章",
        "硝子の庭",
        "地図職人の娘",
        "塩と鉄",
        "北国の冬",
        "静かな果樹園",
    ],
    first_names: &[
        "大翔", "陽菜", "蓮", "結愛", "悠真", "葵", "湊", "凛", "陽向", "芽依", "樹", "咲良",
        "大和", "美月", "颯", "結菜", "翔太", "彩花", "健太", "真央",
    ],
    last_names: &[
        "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤", "吉田",
        "山田", "佐々木", "山口", "松本", "井上", "木村", "林", "斎藤", "清水",
    ],
    family_name_first: true,
    publisher_formats: &[
        "株式会社{a}",
        "{a}出版",
        "{a}書房",
        "有限会社{a}",
        "{a}{b}社",
    ],
    lorem_words: &[
        "本", "物語", "時間", "記憶", "夜", "光", "風", "海", "街", "手紙", "旅", "森", "声",
        "季節", "窓", "影", "約束", "灯り", "雨", "道", "朝", "夢", "扉", "空",
    ],
    word_separator: "",
    sentence_end: "。",
    isbn_group: 4,
    salt: 0x6a61_0000_0000_0003,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_tables() {
        for lang in Language::ALL {
            let data = locale(lang);
            assert!(!data.titles.is_empty());
            assert!(!data.first_names.is_empty());
            assert!(!data.last_names.is_empty());
            assert!(!data.publisher_formats.is_empty());
            assert!(!data.lorem_words.is_empty());
        }
    }

    #[test]
    fn test_salts_are_distinct() {
        assert_ne!(EN.salt, DE.salt);
        assert_ne!(DE.salt, JA.salt);
        assert_ne!(EN.salt, JA.salt);
    }
}
