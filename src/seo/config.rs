use serde::{Deserialize, Serialize};

/// Descriptive metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: "Два-Кадра - Детская студия видеотворчества в Ярославле".to_string(),
            description: "Детская студия видеотворчества в Ярославле. Учим детей писать сценарии, \
                          снимать, монтировать. Ежовости для телеканала 'Я первый'. Фестивальные \
                          награды. С 2017 года."
                .to_string(),
            keywords: Some(
                [
                    "студия видеотворчества",
                    "детская студия",
                    "Ярославль",
                    "видеомонтаж",
                    "сценарий",
                    "кинематография",
                    "Ежовости",
                    "детское кино",
                    "актерское мастерство",
                ]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            ),
            image: Some("/images/hero-kids-filming.jpg".to_string()),
            url: Some("https://dva-kadra-studio.manus.space/".to_string()),
            content_type: Some("website".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostalAddress {
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// Facts about the studio used by the structured-data builders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BusinessProfile {
    pub name: String,
    pub url: String,
    pub image: String,
    pub logo: String,
    pub description: String,
    pub short_description: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub price_range: String,
    pub same_as: Vec<String>,
    pub founding_date: String,
    pub area_served: String,
    pub service_type: String,
    pub language: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Два-Кадра".to_string(),
            url: "https://dva-kadra-studio.manus.space/".to_string(),
            image: "/images/hero-kids-filming.jpg".to_string(),
            logo: "/images/logo.png".to_string(),
            description: "Детская студия видеотворчества в Ярославле. Учим детей писать сценарии, \
                          снимать, монтировать, работать в кадре и в команде."
                .to_string(),
            short_description: "Детская студия видеотворчества в Ярославле с 2017 года".to_string(),
            telephone: "+7 (915) 976-55-79".to_string(),
            email: "yuli-tita@yandex.ru".to_string(),
            address: PostalAddress {
                street_address: "Силикатное ш., 19".to_string(),
                locality: "Ярославль".to_string(),
                region: "Ярославская область".to_string(),
                postal_code: "150000".to_string(),
                country: "RU".to_string(),
            },
            price_range: "$$".to_string(),
            same_as: vec![
                "https://vk.com/2kadra".to_string(),
                "https://t.me/dva_kadra".to_string(),
            ],
            founding_date: "2017".to_string(),
            area_served: "Ярославль".to_string(),
            service_type: "Образование и творчество".to_string(),
            language: "ru".to_string(),
        }
    }
}
