//! The catalog shipped with the crate.
//!
//! Built lazily on first access and shared by every engine in the process.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::catalog::{Catalog, EmotionSpec, EmotionTransformRule, LanguageInfo, LanguageProfile};
use crate::types::EmotionCategory;

pub(super) static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    emotions: emotions(),
    rules: rules(),
    languages: languages(),
    supported_languages: supported_languages(),
});

fn emotions() -> Vec<EmotionSpec> {
    use EmotionCategory::{Casual, Complex, Primary, Professional, Social};

    [
        ("Happy", "😊", Primary),
        ("Sad", "😢", Primary),
        ("Angry", "😡", Primary),
        ("Fear", "😨", Primary),
        ("Surprise", "😲", Primary),
        ("Disgust", "🤢", Primary),
        ("Romantic", "💕", Social),
        ("Flirty", "😉", Social),
        ("Nervous", "😰", Social),
        ("Excited", "🤗", Social),
        ("Empathetic", "🤝", Social),
        ("Apologetic", "🙏", Social),
        ("Professional", "💼", Professional),
        ("Confident", "💪", Professional),
        ("Diplomatic", "🤵", Professional),
        ("Assertive", "👑", Professional),
        ("Casual", "😎", Casual),
        ("Humorous", "😄", Casual),
        ("Sarcastic", "😏", Casual),
        ("Friendly", "🌟", Casual),
        ("Melancholy", "🌙", Complex),
        ("Euphoric", "🚀", Complex),
        ("Contemplative", "🤔", Complex),
        ("Passionate", "🔥", Complex),
        ("Serene", "🕊️", Complex),
        ("Mischievous", "😈", Complex),
    ]
    .into_iter()
    .map(|(name, emoji, category)| EmotionSpec {
        name: name.to_string(),
        emoji: emoji.to_string(),
        category,
    })
    .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn rule(
    starters: &[&str],
    replacements: &[(&str, &str)],
    intensifiers: &[&str],
    endings: &[&str],
) -> EmotionTransformRule {
    EmotionTransformRule {
        starters: strings(starters),
        replacements: replacements
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect(),
        intensifiers: strings(intensifiers),
        endings: strings(endings),
    }
}

// Surprise, Disgust, Assertive, Melancholy, Euphoric, Serene and Mischievous
// are selectable but have no rule; they only show up in metadata.
fn rules() -> BTreeMap<String, EmotionTransformRule> {
    let entries = [
        (
            "Happy",
            rule(
                &["Good news:", "I'm so happy to say", "It honestly makes my day that", "Guess what,"],
                &[("good", "wonderful"), ("nice", "lovely"), ("okay", "great")],
                &["really", "so", "truly"],
                &["😊", "😄", "🌞"],
            ),
        ),
        (
            "Sad",
            rule(
                &[
                    "I don't know how to say this, but",
                    "It hurts a little to admit it, but",
                    "With a heavy heart,",
                    "I've been feeling low, and",
                ],
                &[("happy", "okay"), ("good", "alright")],
                &["quietly", "deeply", "truly"],
                &["😢", "💙", "🌧️"],
            ),
        ),
        (
            "Angry",
            rule(
                &["I need to be honest,", "This has to be said:", "Frankly,", "I'm upset, and"],
                &[("annoyed", "furious"), ("bad", "unacceptable"), ("upset", "angry")],
                &["seriously", "really", "honestly"],
                &["😡", "😤"],
            ),
        ),
        (
            "Fear",
            rule(
                &[
                    "I'm a little scared to say this, but",
                    "I'm worried that",
                    "It frightens me to admit that",
                    "Please don't be mad, but",
                ],
                &[("worried", "terrified"), ("nervous", "anxious")],
                &["honestly", "really", "deeply"],
                &["😨", "😟"],
            ),
        ),
        (
            "Romantic",
            rule(
                &[
                    "I have to confess something,",
                    "Every time I think of you,",
                    "From the bottom of my heart,",
                    "I can't hide it anymore,",
                ],
                &[
                    ("like", "have feelings for"),
                    ("girl", "special someone"),
                    ("boy", "special someone"),
                    ("love", "adore"),
                    ("miss", "long for"),
                ],
                &["truly", "deeply", "completely"],
                &["💕", "❤️", "🌹", "✨"],
            ),
        ),
        (
            "Flirty",
            rule(
                &["Okay, don't laugh, but", "Not gonna lie,", "Just so you know,", "Fair warning,"],
                &[("like", "am into"), ("girl", "cutie"), ("nice", "cute")],
                &["totally", "seriously", "kinda"],
                &["😉", "💕", "✨", "🌟"],
            ),
        ),
        (
            "Nervous",
            rule(
                &[
                    "I've been meaning to tell you something...",
                    "This might sound awkward, but",
                    "I hope this doesn't come across wrong, but",
                    "I'm not sure how to say this, but",
                ],
                &[("want", "was hoping"), ("need", "would kind of like")],
                &["kind of", "sort of", "really"],
                &["😰", "😅", "🙈"],
            ),
        ),
        (
            "Excited",
            rule(
                &["I can't wait to tell you:", "Guess what!", "This is so exciting:", "I'm thrilled because"],
                &[("good", "amazing"), ("like", "love"), ("happy", "thrilled")],
                &["super", "totally", "really"],
                &["🤗", "🎉", "🚀"],
            ),
        ),
        (
            "Empathetic",
            rule(
                &["I understand how you feel, and", "I'm here for you, and", "I hear you,", "It makes sense that"],
                &[("sad", "hurt"), ("problem", "struggle")],
                &["truly", "completely", "really"],
                &["🤝", "💛"],
            ),
        ),
        (
            "Apologetic",
            rule(
                &["I'm sorry, but", "Please forgive me,", "I owe you an apology:", "I feel bad about this, but"],
                &[("want", "would like"), ("need", "would appreciate")],
                &["sincerely", "truly", "deeply"],
                &["🙏", "😔"],
            ),
        ),
        (
            "Professional",
            rule(
                &[
                    "I would like to let you know that",
                    "For your information,",
                    "Please note that",
                    "I wanted to follow up:",
                ],
                &[
                    ("want", "would like"),
                    ("need", "require"),
                    ("get", "obtain"),
                    ("okay", "acceptable"),
                ],
                &["sincerely", "respectfully", "certainly"],
                &["💼", "📊"],
            ),
        ),
        (
            "Confident",
            rule(
                &[
                    "I want you to know that",
                    "I'm certain about this:",
                    "Let me be direct:",
                    "I need to tell you something important:",
                ],
                &[("think", "know"), ("maybe", "definitely"), ("might", "will"), ("hope", "expect")],
                &["absolutely", "definitely", "genuinely"],
                &["💪", "😎", "🔥"],
            ),
        ),
        (
            "Diplomatic",
            rule(
                &["With respect,", "If I may,", "I'd like to suggest that", "I wanted to mention that"],
                &[("wrong", "not quite right"), ("bad", "less than ideal"), ("problem", "challenge")],
                &["gently", "respectfully", "kindly"],
                &["🤵", "🤝"],
            ),
        ),
        (
            "Casual",
            rule(
                &["So,", "Btw,", "Just saying,", "Anyway,"],
                &[("hello", "hey"), ("yes", "yeah"), ("going to", "gonna")],
                &["kinda", "pretty", "lowkey"],
                &["😎", "✌️"],
            ),
        ),
        (
            "Humorous",
            rule(
                &["Fun fact:", "Plot twist:", "Breaking news:", "Not to be dramatic, but"],
                &[("like", "am weirdly obsessed with")],
                &["hilariously", "ridiculously", "absurdly"],
                &["😄", "😂"],
            ),
        ),
        (
            "Sarcastic",
            rule(
                &["Oh great,", "Wow, shocking,", "Sure, because", "Well, obviously"],
                &[("great", "just fantastic"), ("good", "oh-so-wonderful")],
                &["totally", "clearly", "obviously"],
                &["😏", "🙄"],
            ),
        ),
        (
            "Friendly",
            rule(
                &["Hope you're doing well!", "Just wanted to say", "Hey there,", "Good to hear from you,"],
                &[("hello", "hi there")],
                &["really", "truly", "so"],
                &["🌟", "😊"],
            ),
        ),
        (
            "Contemplative",
            rule(
                &["I've been thinking,", "Lately I keep wondering whether", "On reflection,", "When I think about it,"],
                &[("know", "suspect")],
                &["quietly", "often", "sometimes"],
                &["🤔", "🌙"],
            ),
        ),
        (
            "Passionate",
            rule(
                &["I can't stop thinking about this:", "With everything I have,", "More than anything,", "I feel it so strongly:"],
                &[("like", "am crazy about"), ("want", "long for")],
                &["fiercely", "deeply", "wholeheartedly"],
                &["🔥", "❤️‍🔥"],
            ),
        ),
    ];
    entries
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect()
}

fn profile(
    greetings: &[&str],
    expressions: &[&str],
    endings: &[&str],
    modern_phrases: &[&str],
    fillers: &[&str],
) -> LanguageProfile {
    LanguageProfile {
        greetings: strings(greetings),
        expressions: strings(expressions),
        endings: strings(endings),
        modern_phrases: strings(modern_phrases),
        fillers: strings(fillers),
    }
}

// English is the source language and intentionally has no profile.
fn languages() -> BTreeMap<String, LanguageProfile> {
    let entries = [
        (
            "es",
            profile(
                &["Hola,", "Oye,", "Buenas,", "Mira,"],
                &["la verdad", "sinceramente", "de corazón", "te cuento que"],
                &["de verdad", "un abrazo", "jaja", "besos"],
                &["en serio", "fíjate", "sin mentir", "posta"],
                &["pues", "bueno", "o sea", "este"],
            ),
        ),
        (
            "fr",
            profile(
                &["Salut,", "Coucou,", "Bonjour,", "Dis,"],
                &["franchement", "honnêtement", "en vrai", "du fond du cœur"],
                &["bisous", "à plus", "voilà", "tu sais"],
                &["trop bien", "grave", "genre", "bref"],
                &["euh", "bon", "ben", "alors"],
            ),
        ),
        (
            "de",
            profile(
                &["Hallo,", "Hey,", "Servus,", "Moin,"],
                &["ehrlich gesagt", "ganz ehrlich", "von Herzen", "weißt du"],
                &["liebe Grüße", "bis bald", "echt jetzt", "tschüss"],
                &["krass", "läuft", "safe", "digga"],
                &["also", "naja", "halt", "eigentlich"],
            ),
        ),
        (
            "it",
            profile(
                &["Ciao,", "Ehi,", "Salve,", "Senti,"],
                &["sinceramente", "a dire il vero", "di cuore", "onestamente"],
                &["un abbraccio", "baci", "a presto", "davvero"],
                &["tipo", "troppo forte", "boh", "ci sta"],
                &["allora", "cioè", "insomma", "beh"],
            ),
        ),
        (
            "pt",
            profile(
                &["Oi,", "Olá,", "E aí,", "Ei,"],
                &["sinceramente", "na verdade", "de coração", "pra falar a verdade"],
                &["beijos", "abraços", "tá bom", "até mais"],
                &["tipo assim", "top", "demais", "sério"],
                &["então", "bom", "né", "olha"],
            ),
        ),
        (
            "hi",
            profile(
                &["Namaste,", "Arre,", "Suno,", "Hey yaar,"],
                &["sach mein", "dil se", "honestly yaar", "sach bataun toh"],
                &["yaar", "na", "bas itna hi", "samjhe"],
                &["ekdum mast", "full on", "bindaas", "scene yeh hai ki"],
                &["matlab", "acha", "toh", "haan"],
            ),
        ),
        (
            "te",
            profile(
                &["Namaskaram,", "Emandi,", "Hey ra,", "Vinu,"],
                &["nijam ga", "manasu tho", "cheppali ante", "nijanga cheptunna"],
                &["ra", "andi", "anthe", "sare na"],
                &["super ga", "mass", "keka", "chala bagundi"],
                &["ante", "asalu", "inka", "aithe"],
            ),
        ),
        (
            "ta",
            profile(
                &["Vanakkam,", "Dei,", "Hey machan,", "Kelu,"],
                &["unmaiya", "manasaara", "sollanum na", "nejama"],
                &["da", "nga", "avlo dhaan", "seriya"],
                &["semma", "vera level", "mass", "romba nalla"],
                &["adhu", "apdiye", "enna na", "sari"],
            ),
        ),
        (
            "genz",
            profile(
                &["yo,", "heyy,", "okay so", "bestie,"],
                &["ngl", "lowkey", "fr fr", "not gonna lie"],
                &["no cap", "fr", "periodt", "iykyk"],
                &["it's giving", "main character energy:", "vibes:", "real talk"],
                &["like", "literally", "tbh", "deadass"],
            ),
        ),
    ];
    entries
        .into_iter()
        .map(|(code, profile)| (code.to_string(), profile))
        .collect()
}

// Listed in picker order. Romanized input is expected for the Indian
// languages; only some of the listed codes have idiom profiles.
fn supported_languages() -> Vec<LanguageInfo> {
    [
        ("en", "English", "🇺🇸", false),
        ("es", "Español", "🇪🇸", false),
        ("fr", "Français", "🇫🇷", false),
        ("de", "Deutsch", "🇩🇪", false),
        ("it", "Italiano", "🇮🇹", false),
        ("pt", "Português", "🇵🇹", false),
        ("ru", "Русский", "🇷🇺", false),
        ("ja", "日本語", "🇯🇵", false),
        ("ko", "한국어", "🇰🇷", false),
        ("zh", "中文", "🇨🇳", false),
        ("ar", "العربية", "🇸🇦", false),
        ("hi", "हिन्दी (Hindi)", "🇮🇳", true),
        ("te", "తెలుగు (Telugu)", "🇮🇳", true),
        ("ta", "தமிழ் (Tamil)", "🇮🇳", true),
        ("kn", "ಕನ್ನಡ (Kannada)", "🇮🇳", true),
        ("ml", "മലയാളം (Malayalam)", "🇮🇳", true),
        ("bn", "বাংলা (Bengali)", "🇮🇳", true),
        ("gu", "ગુજરાતી (Gujarati)", "🇮🇳", true),
        ("mr", "मराठी (Marathi)", "🇮🇳", true),
        ("pa", "ਪੰਜਾਬੀ (Punjabi)", "🇮🇳", true),
    ]
    .into_iter()
    .map(|(code, name, flag, transliteration)| LanguageInfo {
        code: code.to_string(),
        name: name.to_string(),
        flag: flag.to_string(),
        transliteration,
    })
    .collect()
}
