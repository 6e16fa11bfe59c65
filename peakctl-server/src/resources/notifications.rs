//! Notifications - `/api/notificacion`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Notifications;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(deserialize_with = "nullable")]
    pub id_notificacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub mensaje_notificacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_notificacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub estado_notificacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub destinatario: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotificationChanges {
    pub id_usuario: Patch,
    pub id_pedido: Patch,
    pub mensaje_notificacion: Patch,
    pub fecha_notificacion: Patch,
    pub estado_notificacion: Patch,
    pub destinatario: Patch,
}

impl Record for Notification {
    const COLUMNS: &'static [&'static str] = &[
        "id_notificacion",
        "id_usuario",
        "id_pedido",
        "mensaje_notificacion",
        "fecha_notificacion",
        "estado_notificacion",
        "destinatario",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_notificacion", self.id_notificacion),
            ("id_usuario", self.id_usuario),
            ("id_pedido", self.id_pedido),
            ("mensaje_notificacion", self.mensaje_notificacion),
            ("fecha_notificacion", self.fecha_notificacion),
            ("estado_notificacion", self.estado_notificacion),
            ("destinatario", self.destinatario),
        ]
    }
}

impl Changeset for NotificationChanges {
    const COLUMNS: &'static [&'static str] = &[
        "id_usuario",
        "id_pedido",
        "mensaje_notificacion",
        "fecha_notificacion",
        "estado_notificacion",
        "destinatario",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_usuario", self.id_usuario),
            ("id_pedido", self.id_pedido),
            ("mensaje_notificacion", self.mensaje_notificacion),
            ("fecha_notificacion", self.fecha_notificacion),
            ("estado_notificacion", self.estado_notificacion),
            ("destinatario", self.destinatario),
        ]
    }
}

impl Resource for Notifications {
    type Record = Notification;
    type Changes = NotificationChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "notificacion",
        table: "notificacion",
        identity: "id_notificacion",
        required: &[
            "id_notificacion",
            "id_usuario",
            "id_pedido",
            "mensaje_notificacion",
            "fecha_notificacion",
            "estado_notificacion",
            "destinatario",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los datos de la notificacion",
            not_found: "notificacion no encontrada",
            get_failed: "Error al obtener la notificacion",
            invalid: "Datos requeridos obligatoriamente",
            create_failed: "Error al crear la notificacion",
            update_not_found: "Notificacion no encontrada ",
            updated: "Notificacion actualizada correctamente",
            update_failed: "Error al actualizar la notificacion",
            delete_not_found: "Notificacion no encontrada",
            deleted: "Notificacion eliminada corectamente",
            delete_failed: "Error al eliminar la notificacion",
        },
    };
}
