//! Locale selection and the per-locale message catalog
//!
//! Every user-facing string lives in one lookup table per locale so that
//! translations stay complete and can be checked by iterating all
//! locale/message pairs. The score label is part of the catalog because the
//! prompt template and the response parser must agree on it.

use std::fmt;

/// Supported report locales. Turkish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Tr, Locale::En];

    pub fn messages(self) -> &'static MessageCatalog {
        match self {
            Locale::Tr => &TR_MESSAGES,
            Locale::En => &EN_MESSAGES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Tr => write!(f, "tr"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// All user-facing strings for one locale.
///
/// `missing_keywords` carries a `{keywords}` placeholder and
/// `model_failure` an `{error}` placeholder.
pub struct MessageCatalog {
    pub empty_cv: &'static str,
    pub missing_keywords: &'static str,
    pub positive_feedback: &'static str,
    pub model_failure: &'static str,
    pub score_label: &'static str,
    pub ats_improvement_tips: [&'static str; 10],
}

pub static TR_MESSAGES: MessageCatalog = MessageCatalog {
    empty_cv: "CV'den metin okunamadı veya CV boş.",
    missing_keywords: "ATS uyumluluğunuzu artırmak için şu anahtar kelimeleri eklemeyi düşünün: {keywords}",
    positive_feedback: "İş ilanıyla ilgili önemli anahtar kelimeleri başarıyla CV'nize eklemişsiniz!",
    model_failure: "Yapay zeka destekli öneriler şu anda alınamıyor: {error}",
    score_label: "Puan:",
    ats_improvement_tips: [
        "İş ilanındaki anahtar kelimeleri CV'nize ekleyin.",
        "Sade ve düz bir format kullanın, tablo ve şekillerden kaçının.",
        "Başlıkları standartlaştırın (Eğitim, Deneyim, Yetenekler vb.).",
        "PDF veya DOCX formatında kaydedin.",
        "Kısa ve öz yazın, gereksiz uzun cümlelerden kaçının.",
        "İmla ve dil bilgisine dikkat edin.",
        "İletişim bilgilerinizi eksiksiz yazın.",
        "Gereksiz kişisel bilgilerden kaçının (TC kimlik, medeni durum, din vb.).",
        "Her iş deneyimi için tarih ve pozisyon belirtin.",
        "Eğitim ve sertifikaları kronolojik sırayla yazın.",
    ],
};

pub static EN_MESSAGES: MessageCatalog = MessageCatalog {
    empty_cv: "No text could be read from the CV or the CV is empty.",
    missing_keywords: "Consider adding these keywords to improve your ATS compatibility: {keywords}",
    positive_feedback: "You have successfully included important keywords from the job description in your CV!",
    model_failure: "AI-powered suggestions are currently unavailable: {error}",
    score_label: "Score:",
    ats_improvement_tips: [
        "Add keywords from the job description to your CV.",
        "Use a simple and clean format, avoid tables and shapes.",
        "Standardize section titles (Education, Experience, Skills, etc.).",
        "Save as PDF or DOCX format.",
        "Be concise, avoid unnecessarily long sentences.",
        "Pay attention to spelling and grammar.",
        "Include your contact information completely.",
        "Avoid unnecessary personal information (ID, marital status, religion, etc.).",
        "Specify dates and positions for each job experience.",
        "List education and certificates in chronological order.",
    ],
};
