//! Satisfaction surveys - `/api/satisfaccion`
//!
//! Backed by `encuesta_satisfaccion`. The order a survey belongs to is fixed
//! at creation: `id_pedido` is not updatable.

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Surveys;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Survey {
    #[serde(deserialize_with = "nullable")]
    pub id_encuesta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub puntuacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub comentarios: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_encuesta: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurveyChanges {
    pub id_usuario: Patch,
    pub puntuacion: Patch,
    pub comentarios: Patch,
    pub fecha_encuesta: Patch,
}

impl Record for Survey {
    const COLUMNS: &'static [&'static str] = &[
        "id_encuesta",
        "id_usuario",
        "id_pedido",
        "puntuacion",
        "comentarios",
        "fecha_encuesta",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_encuesta", self.id_encuesta),
            ("id_usuario", self.id_usuario),
            ("id_pedido", self.id_pedido),
            ("puntuacion", self.puntuacion),
            ("comentarios", self.comentarios),
            ("fecha_encuesta", self.fecha_encuesta),
        ]
    }
}

impl Changeset for SurveyChanges {
    const COLUMNS: &'static [&'static str] =
        &["id_usuario", "puntuacion", "comentarios", "fecha_encuesta"];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_usuario", self.id_usuario),
            ("puntuacion", self.puntuacion),
            ("comentarios", self.comentarios),
            ("fecha_encuesta", self.fecha_encuesta),
        ]
    }
}

impl Resource for Surveys {
    type Record = Survey;
    type Changes = SurveyChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "satisfaccion",
        table: "encuesta_satisfaccion",
        identity: "id_encuesta",
        required: &[
            "id_encuesta",
            "id_usuario",
            "id_pedido",
            "puntuacion",
            "comentarios",
            "fecha_encuesta",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener las encuestas de satisfaccion",
            not_found: "Encuesta no encontrada",
            get_failed: "Error al obtener la encuesta",
            invalid: "Puntuacion, comentarios necesarios y fecha",
            create_failed: "Error al crear la encuesta de satisfaccion",
            update_not_found: "Encuesta no encontrada ",
            updated: "Encuesta de satisfaccion actualizada correctamente",
            update_failed: "Error al actualizar la encuesta",
            delete_not_found: "Encuesta no encontrada",
            deleted: "Encuesta eliminada correctamente",
            delete_failed: "Error al eliminar la encuesta",
        },
    };
}
