//! Menu catalog endpoints

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{
    AvailabilityPatch, MenuFilter, MenuItem, MenuItemCreate, MenuItemCreated, MenuItemUpdate,
};

/// `/api/menu` operations
pub struct MenuApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl MenuApi<'_> {
    /// List menu items, optionally filtered by cuisine/category/availability
    pub async fn list(&self, filter: &MenuFilter) -> ClientResult<Vec<MenuItem>> {
        let response = self
            .http
            .get_query::<ApiResponse<Vec<MenuItem>>>("/api/menu", &filter.query_pairs())
            .await?;
        super::require_data(response, "menu")
    }

    /// Get one menu item
    pub async fn get(&self, menu_id: i64) -> ClientResult<MenuItem> {
        let response = self
            .http
            .get::<ApiResponse<MenuItem>>(&format!("/api/menu/{menu_id}"))
            .await?;
        super::require_data(response, "menu item")
    }

    /// Create a menu item
    pub async fn create(&self, item: &MenuItemCreate) -> ClientResult<MenuItemCreated> {
        let response = self
            .http
            .post::<ApiResponse<MenuItemCreated>, _>("/api/menu", item)
            .await?;
        super::require_data(response, "created menu item")
    }

    /// Replace a menu item
    pub async fn update(&self, menu_id: i64, item: &MenuItemUpdate) -> ClientResult<()> {
        self.http
            .put::<ApiResponse<()>, _>(&format!("/api/menu/{menu_id}"), item)
            .await?;
        Ok(())
    }

    /// Toggle availability without touching the rest of the item
    pub async fn set_availability(&self, menu_id: i64, is_available: bool) -> ClientResult<()> {
        self.http
            .patch::<ApiResponse<()>, _>(
                &format!("/api/menu/{menu_id}/availability"),
                &AvailabilityPatch { is_available },
            )
            .await?;
        Ok(())
    }

    /// Delete a menu item
    pub async fn delete(&self, menu_id: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<()>>(&format!("/api/menu/{menu_id}"))
            .await?;
        Ok(())
    }
}
