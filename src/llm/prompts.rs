//! Locale-specific prompt templates for the model advice call
//!
//! The requested response format is a wire contract shared with
//! [`crate::llm::parser`]: the first line carries the score under the
//! locale's literal label, followed by exactly five `-` bullets. Changing a
//! template without updating the parser breaks scoring silently, so the two
//! are tested as a pair.

use crate::locale::Locale;

const TR_TEMPLATE: &str = "\
Aşağıda bir özgeçmiş (CV) metni ve iş ilanı metni verilmiştir. CV'nin iş \
ilanıyla uyumluluğunu 0-100 arası bir puanla değerlendir ve bunu ilk satırda \
tam olarak 'Puan: <sayı>' biçiminde yaz. Ardından CV'nin ATS uyumluluğunu ve \
genel kalitesini artırmak için kişiye özel, Türkçe ve her biri '-' ile \
başlayan tam 5 öneri maddesi üret. Eksik anahtar kelimeler, format, içerik, \
dil, detay, gelişim ve genel iş başvurusu başarısı açısından öneriler ver. \
Sadece puan satırını ve öneri maddelerini üret, açıklama ekleme.

CV metni:
{cv}

İş ilanı metni:
{job}
";

const EN_TEMPLATE: &str = "\
Below is a resume (CV) text and a job description. Rate the CV's \
compatibility with the job on a 0-100 scale and write it on the first line \
as exactly 'Score: <number>'. Then generate exactly 5 personalized, \
bullet-pointed suggestions in English, each starting with '-', to improve \
the CV's ATS compatibility and overall quality. Give advice on missing \
keywords, format, content, language, detail, development, and general job \
application success. Only output the score line and the suggestion bullets, \
no explanations.

CV text:
{cv}

Job description:
{job}
";

/// Render the advice prompt for one locale, embedding the verbatim resume
/// text and job description.
pub fn build_prompt(locale: Locale, cv_text: &str, job_description: &str) -> String {
    let template = match locale {
        Locale::Tr => TR_TEMPLATE,
        Locale::En => EN_TEMPLATE,
    };
    template.replace("{cv}", cv_text).replace("{job}", job_description)
}
