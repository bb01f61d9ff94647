//! Errors raised by the entity registry

use hecs::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),

    #[error("entity {entity:?} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}

pub type WorldResult<T> = Result<T, WorldError>;
