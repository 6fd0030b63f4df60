use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Interface language of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    Ar,
}

/// Horizontal direction of rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Language {
    pub fn direction(self) -> Direction {
        match self {
            Language::Fr => Direction::LeftToRight,
            Language::Ar => Direction::RightToLeft,
        }
    }

    /// ISO 639-1 code used in prompts and file names
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Default name for the downloaded PDF
    pub fn pdf_file_name(self) -> &'static str {
        match self {
            Language::Fr => "recette.pdf",
            Language::Ar => "وصفة.pdf",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

/// Translated interface strings for one language.
///
/// Resolved once per session and passed by reference; nothing here is
/// mutable at runtime.
#[derive(Debug, Clone, Copy)]
pub struct UiStrings {
    pub title: &'static str,
    pub ingredient_label: &'static str,
    pub input_hint: &'static str,
    pub generate: &'static str,
    pub loading: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub invalid: &'static str,
    pub download: &'static str,
    pub error: &'static str,
}

/// Per-language option lists shown to the user and interpolated into the
/// generation prompt.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub difficulty_levels: &'static [&'static str],
    pub cuisine_types: &'static [&'static str],
    pub prep_times: &'static [&'static str],
    pub diet_types: &'static [&'static str],
    pub known_ingredients: &'static [&'static str],
}

const FR_STRINGS: UiStrings = UiStrings {
    title: "ChefBot",
    ingredient_label: "Entrez vos ingrédients",
    input_hint: "Exemple : tomate, fromage, poulet",
    generate: "Générer une recette",
    loading: "Génération de la recette...",
    success: "Recette générée !",
    warning: "Entrez au moins deux ingrédients valides !",
    invalid: "Ingrédient(s) non reconnu(s) !",
    download: "Télécharger la recette en PDF",
    error: "Erreur lors de la génération de la recette",
};

const AR_STRINGS: UiStrings = UiStrings {
    title: "شاف بوت",
    ingredient_label: "أدخل المكونات",
    input_hint: "مثال: طماطم، جبن، دجاج",
    generate: "تحضير وصفة",
    loading: "جاري تحضير الوصفة...",
    success: "تم تحضير الوصفة!",
    warning: "أدخل مكونين صحيحين على الأقل!",
    invalid: "هناك مكونات غير معروفة!",
    download: "تحميل الوصفة PDF",
    error: "حدث خطأ أثناء توليد الوصفة",
};

const FR_OPTIONS: Options = Options {
    difficulty_levels: &["Facile", "Moyen", "Difficile"],
    cuisine_types: &[
        "Française",
        "Italienne",
        "Mexicaine",
        "Espagnole",
        "Libanaise",
        "Marocaine",
        "Asiatique",
        "Indienne",
        "Internationale",
    ],
    prep_times: &["Rapide (<30 min)", "Moyen (30-60 min)", "Long (>1 heure)"],
    diet_types: &[
        "Aucun",
        "Végétarien",
        "Végan",
        "Sans gluten",
        "Faible en calories",
    ],
    known_ingredients: &[
        "Tomate",
        "Oignon",
        "Ail",
        "Poulet",
        "Bœuf",
        "Poisson",
        "Crevettes",
        "Pomme de terre",
        "Carotte",
        "Courgette",
        "Aubergine",
        "Poivron",
        "Œuf",
        "Fromage",
        "Lait",
        "Crème",
        "Beurre",
        "Huile d'olive",
        "Vinaigre",
        "Citron",
        "Sel",
        "Poivre",
        "Pâtes",
        "Riz",
        "Pain",
        "Farine",
        "Sucre",
        "Chocolat",
        "Amandes",
        "Noix",
        "Miel",
    ],
};

const AR_OPTIONS: Options = Options {
    difficulty_levels: &["سهلة", "متوسطة", "صعبة"],
    cuisine_types: &[
        "فرنسي", "إيطالي", "مكسيكي", "إسباني", "لبناني", "مغربي", "آسيوي", "هندي", "عالمي",
    ],
    prep_times: &[
        "سريع (<30 دقيقة)",
        "متوسط (30-60 دقيقة)",
        "طويل (>1 ساعة)",
    ],
    diet_types: &[
        "بدون قيود",
        "نباتي",
        "نباتي صرف",
        "خالي من الجلوتين",
        "قليل السعرات",
    ],
    known_ingredients: &[
        "طماطم",
        "بصل",
        "ثوم",
        "دجاج",
        "لحم بقري",
        "سمك",
        "روبيان",
        "بطاطا",
        "جزر",
        "كوسة",
        "باذنجان",
        "فلفل رومي",
        "بيض",
        "جبن",
        "حليب",
        "قشطة",
        "زبدة",
        "زيت زيتون",
        "خل",
        "ليمون",
        "ملح",
        "فلفل",
        "معكرونة",
        "أرز",
        "خبز",
        "طحين",
        "سكر",
        "شوكولاتة",
        "لوز",
        "جوز",
        "عسل",
    ],
};

pub fn strings(language: Language) -> &'static UiStrings {
    match language {
        Language::Fr => &FR_STRINGS,
        Language::Ar => &AR_STRINGS,
    }
}

pub fn options(language: Language) -> &'static Options {
    match language {
        Language::Fr => &FR_OPTIONS,
        Language::Ar => &AR_OPTIONS,
    }
}

/// Pick `count` distinct known ingredients at random
pub fn random_ingredients(language: Language, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    options(language)
        .known_ingredients
        .choose_multiple(&mut rng, count)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        assert_eq!(Language::Fr.direction(), Direction::LeftToRight);
        assert_eq!(Language::Ar.direction(), Direction::RightToLeft);
    }

    #[test]
    fn test_option_lists_are_parallel() {
        let fr = options(Language::Fr);
        let ar = options(Language::Ar);
        assert_eq!(fr.difficulty_levels.len(), ar.difficulty_levels.len());
        assert_eq!(fr.cuisine_types.len(), ar.cuisine_types.len());
        assert_eq!(fr.prep_times.len(), ar.prep_times.len());
        assert_eq!(fr.diet_types.len(), ar.diet_types.len());
        assert_eq!(fr.known_ingredients.len(), ar.known_ingredients.len());
    }

    #[test]
    fn test_random_ingredients() {
        let picked = random_ingredients(Language::Fr, 5);
        assert_eq!(picked.len(), 5);
        let fr = options(Language::Fr);
        for ingredient in &picked {
            assert!(fr.known_ingredients.contains(&ingredient.as_str()));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("fr"), Some(Language::Fr));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("en"), None);
    }
}
