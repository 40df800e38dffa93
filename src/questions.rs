/*
 * src/questions.rs
 * 同梱のお題データ
 */

#[derive(Copy, Clone)]
pub struct Question {
    pub japanese: &'static str, // 表示用 (漢字混じり)
    pub reading: &'static str,  // タイピング用 (ひらがな)
}

/// 問題リスト
///
/// 表示文は記号・数字なし、読みは対応表にあるかなだけで書くこと。
/// （「いっしょ」のような促音＋拗音、長音符「ー」は打てない）
pub const QUESTIONS_LIST: &[Question] = &[
    Question { japanese: "今日はいい天気です", reading: "きょうはいいてんきです" },
    Question { japanese: "桜の花が咲いた", reading: "さくらのはながさいた" },
    Question { japanese: "猫が窓から外を見ている", reading: "ねこがまどからそとをみている" },
    Question { japanese: "朝ご飯を食べました", reading: "あさごはんをたべました" },
    Question { japanese: "駅まで歩いて行きます", reading: "えきまであるいていきます" },
    Question { japanese: "新しい靴を買いました", reading: "あたらしいくつをかいました" },
    Question { japanese: "図書館で本を借りる", reading: "としょかんでほんをかりる" },
    Question { japanese: "雨の日は家で過ごす", reading: "あめのひはいえですごす" },
    Question { japanese: "夏休みに海へ行った", reading: "なつやすみにうみへいった" },
    Question { japanese: "学校の帰りに友達と話す", reading: "がっこうのかえりにともだちとはなす" },
    Question { japanese: "夜空に星がきれいに光る", reading: "よぞらにほしがきれいにひかる" },
    Question { japanese: "冷たい水を一杯飲む", reading: "つめたいみずをいっぱいのむ" },
    Question { japanese: "駐車場に車を止める", reading: "ちゅうしゃじょうにくるまをとめる" },
    Question { japanese: "電車の窓から山が見える", reading: "でんしゃのまどからやまがみえる" },
    Question { japanese: "手紙を書いて送った", reading: "てがみをかいておくった" },
    Question { japanese: "公園で子供たちが遊ぶ", reading: "こうえんでこどもたちがあそぶ" },
    Question { japanese: "毎朝早く起きて走る", reading: "まいあさはやくおきてはしる" },
    Question { japanese: "料理を作るのが好きです", reading: "りょうりをつくるのがすきです" },
    Question { japanese: "新幹線はとても速い", reading: "しんかんせんはとてもはやい" },
    Question { japanese: "明日は雪が降るらしい", reading: "あしたはゆきがふるらしい" },
    Question { japanese: "音楽を聞きながら勉強する", reading: "おんがくをききながらべんきょうする" },
    Question { japanese: "窓を開けて風を入れる", reading: "まどをあけてかぜをいれる" },
    Question { japanese: "動物園でパンダを見た", reading: "どうぶつえんでぱんだをみた" },
    Question { japanese: "切手を集めるのが趣味です", reading: "きってをあつめるのがしゅみです" },
    Question { japanese: "静かな森を散歩する", reading: "しずかなもりをさんぽする" },
    Question { japanese: "冷蔵庫に牛乳がある", reading: "れいぞうこにぎゅうにゅうがある" },
    Question { japanese: "写真を撮りに行こう", reading: "しゃしんをとりにいこう" },
    Question { japanese: "旅行の計画を立てる", reading: "りょこうのけいかくをたてる" },
    Question { japanese: "夕日がとてもきれいだ", reading: "ゆうひがとてもきれいだ" },
];
