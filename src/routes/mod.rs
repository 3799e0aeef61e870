pub mod album_routes;
pub mod system_routes;
