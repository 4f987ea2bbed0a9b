use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::constants::EVENT_ENDPOINT_PREFIX;

/// Evento tal como lo devuelve el backend (copia local, el dueño es el servidor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Se conserva el offset recibido: la etiqueta muestra el día tal cual llegó
    #[serde(rename = "eventDate")]
    pub event_date: DateTime<FixedOffset>,
    #[serde(rename = "eventTime", default, deserialize_with = "null_as_default")]
    pub event_time: String,
    #[serde(rename = "ticketPrice", default, deserialize_with = "null_as_default")]
    pub ticket_price: f64,
    #[serde(rename = "organizedBy", default, deserialize_with = "null_as_default")]
    pub organized_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
}

/// `null` en un campo opcional se trata como ausente, para que un registro
/// con `null` no haga fallar el listado completo
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    /// El evento es futuro, o cae en el mismo día natural que `now`
    /// (en la zona horaria de `now`, sin mirar la hora)
    pub fn is_upcoming<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        let event_date = self.event_date.with_timezone(&now.timezone());
        event_date > *now || event_date.date_naive() == now.date_naive()
    }

    pub fn is_free(&self) -> bool {
        self.ticket_price == 0.0
    }

    /// "Free" o "Rs. 500"
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("Rs. {}", self.ticket_price)
        }
    }

    pub fn display_title(&self) -> String {
        self.title.to_uppercase()
    }

    pub fn display_owner(&self) -> String {
        self.owner.to_uppercase()
    }

    /// Fecha (día tal como se transmitió, sin convertir de zona) + hora en texto libre
    pub fn date_label(&self) -> String {
        format!("{}, {}", self.event_date.format("%Y-%m-%d"), self.event_time)
    }

    /// URL de la imagen principal, `None` si el evento no tiene imagen
    pub fn image_url(&self, backend_url: &str, asset_path: &str) -> Option<String> {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| format!("{}{}/{}", backend_url, asset_path, image.trim_start_matches('/')))
    }

    /// Ruta de la página de reserva
    pub fn booking_path(&self) -> String {
        format!("{}/{}", EVENT_ENDPOINT_PREFIX, self.id)
    }
}
