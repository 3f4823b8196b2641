use crate::models::Tip;

const EN: &[Tip] = &[
    Tip {
        id: "1",
        title: "Start Small, Dream Big",
        content: "Even ₹10 saved daily can become ₹3,650 in a year. Small consistent savings compound over time.",
        category: "savings",
    },
    Tip {
        id: "2",
        title: "Track Every Rupee",
        content: "Monitor your daily expenses. Awareness is the first step to better financial control.",
        category: "budgeting",
    },
    Tip {
        id: "3",
        title: "Beware of Fake Investment Schemes",
        content: "Avoid schemes promising unrealistic returns. Stick to regulated investment options.",
        category: "fraud_prevention",
    },
    Tip {
        id: "4",
        title: "Emergency Fund First",
        content: "Build an emergency fund covering 3-6 months of expenses before investing.",
        category: "planning",
    },
    Tip {
        id: "5",
        title: "SIP is Your Friend",
        content: "Systematic Investment Plans help you invest regularly without timing the market.",
        category: "investment",
    },
];

const HI: &[Tip] = &[
    Tip {
        id: "1",
        title: "छोटी शुरुआत, बड़े सपने",
        content: "रोज़ाना ₹10 की बचत भी एक साल में ₹3,650 बन सकती है। छोटी नियमित बचत समय के साथ बढ़ती है।",
        category: "savings",
    },
    Tip {
        id: "2",
        title: "हर रुपए का हिसाब रखें",
        content: "अपने दैनिक खर्चों पर नज़र रखें। जागरूकता बेहतर वित्तीय नियंत्रण की पहली सीढ़ी है।",
        category: "budgeting",
    },
    Tip {
        id: "3",
        title: "नकली निवेश योजनाओं से बचें",
        content: "अवास्तविक रिटर्न का वादा करने वाली योजनाओं से बचें। नियंत्रित निवेश विकल्पों पर टिके रहें।",
        category: "fraud_prevention",
    },
];

const PB: &[Tip] = &[
    Tip {
        id: "1",
        title: "ਛੋਟੀ ਸ਼ੁਰੂਆਤ, ਵੱਡੇ ਸੁਪਨੇ",
        content: "ਰੋਜ਼ਾਨਾ ₹10 ਦੀ ਬਚਤ ਵੀ ਇੱਕ ਸਾਲ ਵਿੱਚ ₹3,650 ਬਣ ਸਕਦੀ ਹੈ। ਛੋਟੀ ਨਿਯਮਤ ਬਚਤ ਸਮੇਂ ਨਾਲ ਵਧਦੀ ਹੈ।",
        category: "savings",
    },
    Tip {
        id: "2",
        title: "ਹਰ ਰੁਪਏ ਦਾ ਹਿਸਾਬ ਰੱਖੋ",
        content: "ਆਪਣੇ ਰੋਜ਼ਾਨਾ ਖਰਚਿਆਂ ਉੱਤੇ ਨਜ਼ਰ ਰੱਖੋ। ਜਾਗਰੂਕਤਾ ਬਿਹਤਰ ਵਿੱਤੀ ਨਿਯੰਤਰਣ ਦੀ ਪਹਿਲੀ ਸੀੜ੍ਹੀ ਹੈ।",
        category: "budgeting",
    },
];

/// Tips for a language code, falling back to English for anything unknown.
pub fn tips_for(lang: &str) -> &'static [Tip] {
    match lang {
        "hi" => HI,
        "pb" => PB,
        _ => EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_have_catalogs() {
        assert_eq!(tips_for("en").len(), 5);
        assert_eq!(tips_for("hi").len(), 3);
        assert_eq!(tips_for("pb").len(), 2);
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(tips_for("fr"), tips_for("en"));
        assert_eq!(tips_for(""), tips_for("en"));
    }
}
