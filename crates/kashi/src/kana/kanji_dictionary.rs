//! Kanji -> kana dictionary for the static transliteration path.
//!
//! A fixed list of song-lyric vocabulary. Keys are at most
//! [`MAX_KEY_CHARS`] characters; values are hiragana. Longer keys win over
//! shorter keys sharing a prefix (see `fallback::kanji_to_kana`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest key length, in characters.
pub const MAX_KEY_CHARS: usize = 4;

#[rustfmt::skip]
static KANJI_KANA: &[(&str, &str)] = &[
  // four characters
  ("一生懸命", "いっしょうけんめい"),
  ("永遠不滅", "えいえんふめつ"),
  ("一期一会", "いちごいちえ"),
  ("七転八起", "ななころびやおき"),

  // three characters
  ("流れ星", "ながれぼし"),
  ("向日葵", "ひまわり"),
  ("紫陽花", "あじさい"),
  ("大丈夫", "だいじょうぶ"),
  ("真夜中", "まよなか"),
  ("天の川", "あまのがわ"),
  ("蜃気楼", "しんきろう"),

  // two characters
  ("子供", "こども"),
  ("世界", "せかい"),
  ("未来", "みらい"),
  ("過去", "かこ"),
  ("今日", "きょう"),
  ("明日", "あした"),
  ("昨日", "きのう"),
  ("今夜", "こんや"),
  ("今宵", "こよい"),
  ("毎日", "まいにち"),
  ("時間", "じかん"),
  ("瞬間", "しゅんかん"),
  ("永遠", "えいえん"),
  ("言葉", "ことば"),
  ("笑顔", "えがお"),
  ("記憶", "きおく"),
  ("思い出", "おもいで"),
  ("運命", "うんめい"),
  ("奇跡", "きせき"),
  ("約束", "やくそく"),
  ("季節", "きせつ"),
  ("景色", "けしき"),
  ("青空", "あおぞら"),
  ("夜空", "よぞら"),
  ("星空", "ほしぞら"),
  ("太陽", "たいよう"),
  ("宇宙", "うちゅう"),
  ("地球", "ちきゅう"),
  ("勇気", "ゆうき"),
  ("希望", "きぼう"),
  ("自由", "じゆう"),
  ("孤独", "こどく"),
  ("愛情", "あいじょう"),
  ("恋人", "こいびと"),
  ("友達", "ともだち"),
  ("仲間", "なかま"),
  ("二人", "ふたり"),
  ("一人", "ひとり"),
  ("大人", "おとな"),
  ("少女", "しょうじょ"),
  ("少年", "しょうねん"),
  ("自分", "じぶん"),
  ("貴方", "あなた"),
  ("何処", "どこ"),
  ("何故", "なぜ"),
  ("一緒", "いっしょ"),
  ("本当", "ほんとう"),
  ("最後", "さいご"),
  ("最初", "さいしょ"),
  ("大切", "たいせつ"),
  ("大好", "だいす"),
  ("素敵", "すてき"),
  ("綺麗", "きれい"),
  ("痛み", "いたみ"),
  ("涙色", "なみだいろ"),
  ("花火", "はなび"),
  ("桜色", "さくらいろ"),
  ("物語", "ものがたり"),
  ("旅路", "たびじ"),
  ("鼓動", "こどう"),
  ("心臓", "しんぞう"),
  ("声色", "こわいろ"),
  ("足音", "あしおと"),
  ("帰り道", "かえりみち"),
  ("雨音", "あまおと"),
  ("夕焼", "ゆうや"),
  ("朝日", "あさひ"),
  ("月光", "げっこう"),
  ("未完成", "みかんせい"),
  ("歌声", "うたごえ"),

  // one character
  ("子", "こ"),
  ("君", "きみ"),
  ("僕", "ぼく"),
  ("俺", "おれ"),
  ("私", "わたし"),
  ("愛", "あい"),
  ("恋", "こい"),
  ("夢", "ゆめ"),
  ("心", "こころ"),
  ("空", "そら"),
  ("海", "うみ"),
  ("星", "ほし"),
  ("月", "つき"),
  ("日", "ひ"),
  ("光", "ひかり"),
  ("影", "かげ"),
  ("闇", "やみ"),
  ("夜", "よる"),
  ("朝", "あさ"),
  ("風", "かぜ"),
  ("雨", "あめ"),
  ("雪", "ゆき"),
  ("花", "はな"),
  ("桜", "さくら"),
  ("涙", "なみだ"),
  ("声", "こえ"),
  ("歌", "うた"),
  ("手", "て"),
  ("目", "め"),
  ("瞳", "ひとみ"),
  ("胸", "むね"),
  ("道", "みち"),
  ("街", "まち"),
  ("時", "とき"),
  ("今", "いま"),
  ("人", "ひと"),
  ("前", "まえ"),
  ("先", "さき"),
  ("名", "な"),
  ("何", "なに"),
  ("誰", "だれ"),
  ("愛し", "いとし"),
  ("見", "み"),
  ("行", "い"),
  ("来", "き"),
  ("言", "い"),
  ("会", "あ"),
  ("笑", "わら"),
  ("泣", "な"),
  ("歩", "ある"),
  ("走", "はし"),
  ("飛", "と"),
  ("生", "い"),
  ("死", "し"),
  ("消", "き"),
  ("抱", "だ"),
  ("待", "ま"),
  ("探", "さが"),
  ("信", "しん"),
  ("届", "とど"),
  ("忘", "わす"),
  ("思", "おも"),
  ("想", "おも"),
  ("知", "し"),
  ("聞", "き"),
  ("離", "はな"),
  ("変", "か"),
  ("強", "つよ"),
  ("弱", "よわ"),
  ("優", "やさ"),
  ("悲", "かな"),
  ("寂", "さび"),
  ("嬉", "うれ"),
  ("新", "あたら"),
  ("遠", "とお"),
  ("近", "ちか"),
  ("長", "なが"),
  ("高", "たか"),
  ("白", "しろ"),
  ("黒", "くろ"),
  ("赤", "あか"),
  ("青", "あお"),
  ("一", "いち"),
  ("二", "に"),
  ("三", "さん"),
  ("千", "せん"),
  ("万", "まん"),
];

static DICTIONARY: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| KANJI_KANA.iter().copied().collect());

/// Looks up the kana reading of `key`.
pub fn lookup(key: &str) -> Option<&'static str> {
  DICTIONARY.get(key).copied()
}

/// All dictionary entries in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
  KANJI_KANA.iter().copied()
}
