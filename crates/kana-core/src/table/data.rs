//! Built-in kana → romaji pattern table.
//!
//! The first spelling of each entry is the canonical one used for display;
//! the rest are accepted alternates.

pub const DEFAULT_TOML: &str = r#"
[patterns]
# Basic hiragana
"あ" = ["a"]
"い" = ["i", "yi"]
"う" = ["u", "wu"]
"え" = ["e"]
"お" = ["o"]
"か" = ["ka", "ca"]
"き" = ["ki"]
"く" = ["ku", "cu", "qu"]
"け" = ["ke"]
"こ" = ["ko", "co"]
"さ" = ["sa"]
"し" = ["si", "shi", "ci"]
"す" = ["su"]
"せ" = ["se", "ce"]
"そ" = ["so"]
"た" = ["ta"]
"ち" = ["ti", "chi"]
"つ" = ["tu", "tsu"]
"て" = ["te"]
"と" = ["to"]
"な" = ["na"]
"に" = ["ni"]
"ぬ" = ["nu"]
"ね" = ["ne"]
"の" = ["no"]
"は" = ["ha"]
"ひ" = ["hi"]
"ふ" = ["fu", "hu"]
"へ" = ["he"]
"ほ" = ["ho"]
"ま" = ["ma"]
"み" = ["mi"]
"む" = ["mu"]
"め" = ["me"]
"も" = ["mo"]
"や" = ["ya"]
"ゆ" = ["yu"]
"よ" = ["yo"]
"ら" = ["ra"]
"り" = ["ri"]
"る" = ["ru"]
"れ" = ["re"]
"ろ" = ["ro"]
"わ" = ["wa"]
"を" = ["wo"]
"ん" = ["nn", "xn", "n"]
"ン" = ["nn", "xn", "n"]

# Dakuon / handakuon
"が" = ["ga"]
"ぎ" = ["gi"]
"ぐ" = ["gu"]
"げ" = ["ge"]
"ご" = ["go"]
"ざ" = ["za"]
"じ" = ["zi", "ji"]
"ず" = ["zu"]
"ぜ" = ["ze"]
"ぞ" = ["zo"]
"だ" = ["da"]
"ぢ" = ["di", "ji"]
"づ" = ["du", "zu"]
"で" = ["de"]
"ど" = ["do"]
"ば" = ["ba"]
"び" = ["bi"]
"ぶ" = ["bu"]
"べ" = ["be"]
"ぼ" = ["bo"]
"ぱ" = ["pa"]
"ぴ" = ["pi"]
"ぷ" = ["pu"]
"ぺ" = ["pe"]
"ぽ" = ["po"]

# Youon digraphs
"きゃ" = ["kya"]
"きぃ" = ["kyi"]
"きゅ" = ["kyu"]
"きぇ" = ["kye"]
"きょ" = ["kyo"]
"しゃ" = ["sya", "sha"]
"しぃ" = ["syi"]
"しゅ" = ["syu", "shu"]
"しぇ" = ["sye", "she"]
"しょ" = ["syo", "sho"]
"ちゃ" = ["tya", "cha"]
"ちぃ" = ["tyi"]
"ちゅ" = ["tyu", "chu"]
"ちぇ" = ["tye", "che"]
"ちょ" = ["tyo", "cho"]
"にゃ" = ["nya"]
"にぃ" = ["nyi"]
"にゅ" = ["nyu"]
"にぇ" = ["nye"]
"にょ" = ["nyo"]
"ひゃ" = ["hya"]
"ひぃ" = ["hyi"]
"ひゅ" = ["hyu"]
"ひぇ" = ["hye"]
"ひょ" = ["hyo"]
"みゃ" = ["mya"]
"みぃ" = ["myi"]
"みゅ" = ["myu"]
"みぇ" = ["mye"]
"みょ" = ["myo"]
"りゃ" = ["rya"]
"りぃ" = ["ryi"]
"りゅ" = ["ryu"]
"りぇ" = ["rye"]
"りょ" = ["ryo"]
"ぎゃ" = ["gya"]
"ぎぃ" = ["gyi"]
"ぎゅ" = ["gyu"]
"ぎぇ" = ["gye"]
"ぎょ" = ["gyo"]
"じゃ" = ["ja", "zya"]
"じぃ" = ["jyi", "zyi"]
"じゅ" = ["ju", "zyu"]
"じぇ" = ["je", "zye"]
"じょ" = ["jo", "zyo"]
"びゃ" = ["bya"]
"びぃ" = ["byi"]
"びゅ" = ["byu"]
"びぇ" = ["bye"]
"びょ" = ["byo"]
"ぴゃ" = ["pya"]
"ぴぃ" = ["pyi"]
"ぴゅ" = ["pyu"]
"ぴぇ" = ["pye"]
"ぴょ" = ["pyo"]
"ぢゃ" = ["dya"]
"ぢぃ" = ["dyi"]
"ぢゅ" = ["dyu"]
"ぢぇ" = ["dye"]
"ぢょ" = ["dyo"]

# Sokuon and small kana
"っ" = ["xtu", "xtsu", "ltu"]
"ぁ" = ["xa", "la"]
"ぃ" = ["xi", "li"]
"ぅ" = ["xu", "lu"]
"ぇ" = ["xe", "le"]
"ぉ" = ["xo", "lo"]
"ゃ" = ["xya", "lya"]
"ゅ" = ["xyu", "lyu"]
"ょ" = ["xyo", "lyo"]

# Compound vowels
"ふぁ" = ["fa"]
"ふぃ" = ["fi"]
"ふぇ" = ["fe"]
"ふぉ" = ["fo"]
"うぁ" = ["wha", "wa"]
"うぃ" = ["whi", "wi"]
"うぇ" = ["whe", "we"]
"うぉ" = ["who", "wo"]
"ゔぁ" = ["va"]
"ゔぃ" = ["vi"]
"ゔぇ" = ["ve"]
"ゔぉ" = ["vo"]
"ゔ" = ["vu"]
"くぁ" = ["qa", "qwa"]
"くぃ" = ["qi", "qwi"]
"くぇ" = ["qe", "qwe"]
"くぉ" = ["qo", "qwo"]
"くゃ" = ["qya"]
"くゅ" = ["qyu"]
"くょ" = ["qyo"]
"つぁ" = ["tsa"]
"つぃ" = ["tsi"]
"つぇ" = ["tse"]
"つぉ" = ["tso"]
"てゃ" = ["tha"]
"てぃ" = ["thi"]
"てゅ" = ["thu"]
"てぇ" = ["the"]
"てょ" = ["tho"]
"とぁ" = ["twa"]
"とぃ" = ["twi"]
"とぅ" = ["twu"]
"とぇ" = ["twe"]
"とぉ" = ["two"]
"でゃ" = ["dha"]
"でぃ" = ["dhi"]
"でゅ" = ["dhu"]
"でぇ" = ["dhe"]
"でょ" = ["dho"]
"ぐぁ" = ["gwa"]
"ぐぃ" = ["gwi"]
"ぐぅ" = ["gwu"]
"ぐぇ" = ["gwe"]
"ぐぉ" = ["gwo"]

# Prolonged sound mark and punctuation
"ー" = ["-"]
"、" = [","]
"。" = ["."]
"・" = ["/"]
"#;
