use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub experience_id: String,
    pub slot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: i64,
    pub promo_code: Option<String>,
}

#[derive(Deserialize)]
pub struct ValidatePromoRequest {
    pub code: String,
    pub amount: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceListQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
}
