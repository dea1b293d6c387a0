//! `/pets`: pet inventory, plus the purchase action.

use axum::{extract::State, Json};

use tally_core::error::Result;
use tally_core::model::PetRequest;
use tally_core::{wire, Pet, PetChange};

use super::{ApiResult, Collection, ItemName};
use crate::app_state::AppState;
use crate::store::ResourceStore;

impl Collection for Pet {
    const PATH: &'static str = "/pets";

    fn store(state: &AppState) -> &dyn ResourceStore<Self> {
        state.pets()
    }

    fn decode_create(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        let req: PetRequest = wire::decode_required(content_type, body)?;
        Ok(Pet::new(name, req.into_fields(name)?))
    }

    fn decode_update(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<PetChange> {
        let req: PetRequest = wire::decode_required(content_type, body)?;
        Ok(PetChange::Replace(req.into_fields(name)?))
    }
}

/// `PUT /pets/{name}/purchase`: 404 if absent, 409 if not available.
pub async fn purchase(
    State(state): State<AppState>,
    ItemName(name): ItemName,
) -> ApiResult<Json<Pet>> {
    let pet = state.pets().update(&name, PetChange::Purchase).await?;
    tracing::info!(%name, "pet purchased");
    Ok(Json(pet))
}
