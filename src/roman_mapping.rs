// ============================================
// src/roman_mapping.rs
// ひらがな → ローマ字 の対応表
// ============================================

use std::collections::HashMap;
use std::sync::LazyLock;

/// 1つの「タイピング単位」（例：「し」「きょ」「っか」）に対応するローマ字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanEntry {
    /// 表示用ローマ字（例: "si"）
    pub display: &'static str,
    /// 許容される入力パターン。先頭が表示用の優先パターン
    pub patterns: &'static [&'static str],
}

/// (かな, 表示用ローマ字, 入力パターン)
type RawEntry = (&'static str, &'static str, &'static [&'static str]);

const ROMAN_TABLE: &[RawEntry] = &[
    // --- 母音 ---
    ("あ", "a", &["a"]),
    ("い", "i", &["i"]),
    ("う", "u", &["u"]),
    ("え", "e", &["e"]),
    ("お", "o", &["o"]),
    // --- か行 ---
    ("か", "ka", &["ka"]),
    ("き", "ki", &["ki"]),
    ("く", "ku", &["ku"]),
    ("け", "ke", &["ke"]),
    ("こ", "ko", &["ko"]),
    // --- さ行 ---
    ("さ", "sa", &["sa"]),
    ("し", "si", &["si", "shi"]),
    ("す", "su", &["su"]),
    ("せ", "se", &["se"]),
    ("そ", "so", &["so"]),
    // --- た行 ---
    ("た", "ta", &["ta"]),
    ("ち", "ti", &["ti", "chi"]),
    ("つ", "tu", &["tu", "tsu"]),
    ("て", "te", &["te"]),
    ("と", "to", &["to"]),
    // --- な行 ---
    ("な", "na", &["na"]),
    ("に", "ni", &["ni"]),
    ("ぬ", "nu", &["nu"]),
    ("ね", "ne", &["ne"]),
    ("の", "no", &["no"]),
    // --- は行 ---
    ("は", "ha", &["ha"]),
    ("ひ", "hi", &["hi"]),
    ("ふ", "hu", &["hu", "fu"]),
    ("へ", "he", &["he"]),
    ("ほ", "ho", &["ho"]),
    // --- ま行 ---
    ("ま", "ma", &["ma"]),
    ("み", "mi", &["mi"]),
    ("む", "mu", &["mu"]),
    ("め", "me", &["me"]),
    ("も", "mo", &["mo"]),
    // --- や行 ---
    ("や", "ya", &["ya"]),
    ("ゆ", "yu", &["yu"]),
    ("よ", "yo", &["yo"]),
    // --- ら行 ---
    ("ら", "ra", &["ra"]),
    ("り", "ri", &["ri"]),
    ("る", "ru", &["ru"]),
    ("れ", "re", &["re"]),
    ("ろ", "ro", &["ro"]),
    // --- わ行・撥音 ---
    ("わ", "wa", &["wa"]),
    ("を", "wo", &["wo"]),
    ("ん", "n", &["n", "nn"]),
    // --- 濁音・半濁音 ---
    ("が", "ga", &["ga"]),
    ("ぎ", "gi", &["gi"]),
    ("ぐ", "gu", &["gu"]),
    ("げ", "ge", &["ge"]),
    ("ご", "go", &["go"]),
    ("ざ", "za", &["za"]),
    ("じ", "zi", &["zi", "ji"]),
    ("ず", "zu", &["zu"]),
    ("ぜ", "ze", &["ze"]),
    ("ぞ", "zo", &["zo"]),
    ("だ", "da", &["da"]),
    ("ぢ", "di", &["di"]),
    ("づ", "du", &["du"]),
    ("で", "de", &["de"]),
    ("ど", "do", &["do"]),
    ("ば", "ba", &["ba"]),
    ("び", "bi", &["bi"]),
    ("ぶ", "bu", &["bu"]),
    ("べ", "be", &["be"]),
    ("ぼ", "bo", &["bo"]),
    ("ぱ", "pa", &["pa"]),
    ("ぴ", "pi", &["pi"]),
    ("ぷ", "pu", &["pu"]),
    ("ぺ", "pe", &["pe"]),
    ("ぽ", "po", &["po"]),
    // --- 拗音 ---
    ("きゃ", "kya", &["kya", "kilya", "kixya"]),
    ("きゅ", "kyu", &["kyu", "kilyu", "kixyu"]),
    ("きょ", "kyo", &["kyo", "kilyo", "kixyo"]),
    ("しゃ", "sya", &["sya", "sha", "silya", "sixya", "shilya", "shixya"]),
    ("しゅ", "syu", &["syu", "shu", "silyu", "sixyu", "shilyu", "shixyu"]),
    ("しょ", "syo", &["syo", "sho", "silyo", "sixyo", "shilyo", "shixyo"]),
    ("ちゃ", "tya", &["tya", "cha", "tilya", "tixya", "chilya", "chixya"]),
    ("ちゅ", "tyu", &["tyu", "chu", "tilyu", "tixyu", "chilyu", "chixyu"]),
    ("ちょ", "tyo", &["tyo", "cho", "tilyo", "tixyo", "chilyo", "chixyo"]),
    ("にゃ", "nya", &["nya", "nilya", "nixya"]),
    ("にゅ", "nyu", &["nyu", "nilyu", "nixyu"]),
    ("にょ", "nyo", &["nyo", "nilyo", "nixyo"]),
    ("ひゃ", "hya", &["hya", "hilya", "hixya"]),
    ("ひゅ", "hyu", &["hyu", "hilyu", "hixyu"]),
    ("ひょ", "hyo", &["hyo", "hilyo", "hixyo"]),
    ("みゃ", "mya", &["mya", "milya", "mixya"]),
    ("みゅ", "myu", &["myu", "milyu", "mixyu"]),
    ("みょ", "myo", &["myo", "milyo", "mixyo"]),
    ("りゃ", "rya", &["rya", "rilya", "rixya"]),
    ("りゅ", "ryu", &["ryu", "rilyu", "rixyu"]),
    ("りょ", "ryo", &["ryo", "rilyo", "rixyo"]),
    // --- 濁音・半濁音の拗音 ---
    ("ぎゃ", "gya", &["gya", "gilya", "gixya"]),
    ("ぎゅ", "gyu", &["gyu", "gilyu", "gixyu"]),
    ("ぎょ", "gyo", &["gyo", "gilyo", "gixyo"]),
    ("じゃ", "zya", &["zya", "ja", "zilya", "zixya", "jilya", "jixya"]),
    ("じゅ", "zyu", &["zyu", "ju", "zilyu", "zixyu", "jilyu", "jixyu"]),
    ("じょ", "zyo", &["zyo", "jo", "zilyo", "zixyo", "jilyo", "jixyo"]),
    ("びゃ", "bya", &["bya", "bilya", "bixya"]),
    ("びゅ", "byu", &["byu", "bilyu", "bixyu"]),
    ("びょ", "byo", &["byo", "bilyo", "bixyo"]),
    ("ぴゃ", "pya", &["pya", "pilya", "pixya"]),
    ("ぴゅ", "pyu", &["pyu", "pilyu", "pixyu"]),
    ("ぴょ", "pyo", &["pyo", "pilyo", "pixyo"]),
    // --- 促音 (っ + 次の文字) ---
    ("っか", "kka", &["kka", "ltuka", "ltsuka", "xtuka", "xtsuka"]),
    ("っき", "kki", &["kki", "ltuki", "ltsuki", "xtuki", "xtsuki"]),
    ("っく", "kku", &["kku", "ltuku", "ltsuku", "xtuku", "xtsuku"]),
    ("っけ", "kke", &["kke", "ltuke", "ltsuke", "xtuke", "xtsuke"]),
    ("っこ", "kko", &["kko", "ltuko", "ltsuko", "xtuko", "xtsuko"]),
    ("っさ", "ssa", &["ssa", "ltusa", "ltsusa", "xtusa", "xtsusa"]),
    ("っし", "ssi", &["ssi", "sshi", "ltusi", "ltsusi", "xtusi", "xtsusi"]),
    ("っす", "ssu", &["ssu", "ltusu", "ltsusu", "xtusu", "xtsusu"]),
    ("っせ", "sse", &["sse", "ltuse", "ltsuse", "xtuse", "xtsuse"]),
    ("っそ", "sso", &["sso", "ltuso", "ltsuso", "xtuso", "xtsuso"]),
    ("った", "tta", &["tta", "ltuta", "ltsuta", "xtuta", "xtsuta"]),
    ("っち", "tti", &["tti", "cchi", "ltuti", "ltsuti", "xtuti", "xtsuti"]),
    ("っつ", "ttu", &["ttu", "ttsu", "ltutu", "ltsutu", "xtutu", "xtsutu"]),
    ("って", "tte", &["tte", "ltute", "ltsute", "xtute", "xtsute"]),
    ("っと", "tto", &["tto", "ltuto", "ltsuto", "xtuto", "xtsuto"]),
    ("っぱ", "ppa", &["ppa", "ltupa", "ltsupa", "xtupa", "xtsupa"]),
    ("っぴ", "ppi", &["ppi", "ltupi", "ltsupi", "xtupi", "xtsupi"]),
    ("っぷ", "ppu", &["ppu", "ltupu", "ltsupu", "xtupu", "xtsupu"]),
    ("っぺ", "ppe", &["ppe", "ltupe", "ltsupe", "xtupe", "xtsupe"]),
    ("っぽ", "ppo", &["ppo", "ltupo", "ltsupo", "xtupo", "xtsupo"]),
];

/// プロセス全体で共有する読み取り専用の辞書（初回参照時に1度だけ構築）
static ROMAN_MAP: LazyLock<HashMap<&'static str, RomanEntry>> =
    LazyLock::new(create_roman_mapping);

/// ローマ字辞書を新しく作成する
pub fn create_roman_mapping() -> HashMap<&'static str, RomanEntry> {
    ROMAN_TABLE
        .iter()
        .map(|&(kana, display, patterns)| (kana, RomanEntry { display, patterns }))
        .collect()
}

/// かな1単位（1〜2文字）を引く。辞書にないもの（カタカナ・漢字・記号・長音符など）は None
pub fn lookup(kana: &str) -> Option<&'static RomanEntry> {
    ROMAN_MAP.get(kana)
}

/// 辞書に登録されているすべてのかな（テスト・デバッグ用）
pub fn keys() -> impl Iterator<Item = &'static str> {
    ROMAN_TABLE.iter().map(|&(kana, _, _)| kana)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_is_well_formed() {
        for (kana, entry) in create_roman_mapping() {
            assert!(!entry.display.is_empty(), "{kana}: display が空");
            assert!(!entry.patterns.is_empty(), "{kana}: パターンが空");
            assert_eq!(entry.patterns[0], entry.display, "{kana}: 先頭パターンが表示と異なる");

            let mut seen = HashSet::new();
            for p in entry.patterns {
                assert!(!p.is_empty(), "{kana}: 空のパターン");
                assert!(
                    p.chars().all(|c| c.is_ascii_lowercase()),
                    "{kana}: 小文字英字以外を含む {p}"
                );
                assert!(seen.insert(*p), "{kana}: 重複パターン {p}");
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(create_roman_mapping().len(), ROMAN_TABLE.len());
    }

    #[test]
    fn test_keys_are_one_or_two_chars() {
        for kana in keys() {
            let n = kana.chars().count();
            assert!(n == 1 || n == 2, "{kana}");
        }
    }

    #[test]
    fn test_irregular_romanizations() {
        assert_eq!(lookup("し").unwrap().patterns, &["si", "shi"]);
        assert_eq!(lookup("ち").unwrap().patterns, &["ti", "chi"]);
        assert_eq!(lookup("つ").unwrap().patterns, &["tu", "tsu"]);
        assert_eq!(lookup("ふ").unwrap().patterns, &["hu", "fu"]);
        assert_eq!(lookup("じ").unwrap().patterns, &["zi", "ji"]);
        assert_eq!(lookup("ん").unwrap().patterns, &["n", "nn"]);
    }

    #[test]
    fn test_small_y_digraphs() {
        assert_eq!(lookup("きょ").unwrap().patterns, &["kyo", "kilyo", "kixyo"]);
        assert_eq!(lookup("じゃ").unwrap().patterns.len(), 6);
        assert!(lookup("じゅ").unwrap().patterns.contains(&"ju"));
        assert!(lookup("しょ").unwrap().patterns.contains(&"sho"));
    }

    #[test]
    fn test_sokuon_units() {
        assert_eq!(
            lookup("っこ").unwrap().patterns,
            &["kko", "ltuko", "ltsuko", "xtuko", "xtsuko"]
        );
        assert_eq!(
            lookup("っし").unwrap().patterns,
            &["ssi", "sshi", "ltusi", "ltsusi", "xtusi", "xtsusi"]
        );
        for kana in keys().filter(|k| k.starts_with('っ')) {
            assert!(lookup(kana).unwrap().patterns.len() >= 5, "{kana}");
        }
    }

    #[test]
    fn test_unsupported_characters() {
        for s in ["ー", "ア", "漢", "、", " ", "　", "っ", "ゃ", "ゐ", "ka"] {
            assert!(lookup(s).is_none(), "{s} は辞書にないはず");
        }
    }
}
