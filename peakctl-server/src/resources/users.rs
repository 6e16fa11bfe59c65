//! Users - `/api/usuarios`
//!
//! The only resource with a credential column. `contraseña` is hashed before
//! it reaches the database and the create response reports the hash as
//! `passHash`. `estado` is optional on create and not updatable.

use serde::{Deserialize, Serialize};

use super::{Changeset, Credential, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Users;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub nombre_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub apellido_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub estado: Option<Scalar>,
    /// Plaintext on the way in, a hash once stored
    #[serde(rename = "contraseña")]
    #[serde(deserialize_with = "nullable")]
    pub contrasena: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub correo_electronico: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub telefono: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_creacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_modificacion: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    pub nombre_usuario: Patch,
    pub apellido_usuario: Patch,
    #[serde(rename = "contraseña")]
    pub contrasena: Patch,
    pub correo_electronico: Patch,
    pub telefono: Patch,
    pub fecha_creacion: Patch,
    pub fecha_modificacion: Patch,
}

impl Record for User {
    const COLUMNS: &'static [&'static str] = &[
        "id_usuario",
        "nombre_usuario",
        "apellido_usuario",
        "estado",
        "contraseña",
        "correo_electronico",
        "telefono",
        "fecha_creacion",
        "fecha_modificacion",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_usuario", self.id_usuario),
            ("nombre_usuario", self.nombre_usuario),
            ("apellido_usuario", self.apellido_usuario),
            ("estado", self.estado),
            ("contraseña", self.contrasena),
            ("correo_electronico", self.correo_electronico),
            ("telefono", self.telefono),
            ("fecha_creacion", self.fecha_creacion),
            ("fecha_modificacion", self.fecha_modificacion),
        ]
    }
}

impl Changeset for UserChanges {
    const COLUMNS: &'static [&'static str] = &[
        "nombre_usuario",
        "apellido_usuario",
        "contraseña",
        "correo_electronico",
        "telefono",
        "fecha_creacion",
        "fecha_modificacion",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("nombre_usuario", self.nombre_usuario),
            ("apellido_usuario", self.apellido_usuario),
            ("contraseña", self.contrasena),
            ("correo_electronico", self.correo_electronico),
            ("telefono", self.telefono),
            ("fecha_creacion", self.fecha_creacion),
            ("fecha_modificacion", self.fecha_modificacion),
        ]
    }
}

impl Resource for Users {
    type Record = User;
    type Changes = UserChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "usuarios",
        table: "usuarios",
        identity: "id_usuario",
        required: &[
            "id_usuario",
            "nombre_usuario",
            "apellido_usuario",
            "contraseña",
            "correo_electronico",
            "telefono",
            "fecha_creacion",
            "fecha_modificacion",
        ],
        credential: Some(Credential {
            column: "contraseña",
            response_field: "passHash",
        }),
        messages: Messages {
            list_failed: "al obtener los datos del usuario",
            not_found: "Usuario no encontrado",
            get_failed: "Error al obtener el usuario",
            invalid: "Datos requeridos obligatoriamente",
            create_failed: "Error al crear el usuario",
            update_not_found: "Usuario no encontrado ",
            updated: "Usuario actualizado correctamente",
            update_failed: "Error al actualizar el usuario",
            delete_not_found: "Usuario no encontrado",
            deleted: "Usuario eliminado corectamente",
            delete_failed: "Error al eliminar el usuario",
        },
    };
}
