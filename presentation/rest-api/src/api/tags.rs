use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Products,
    Categories,
    Auth,
    Cart,
    Wishlist,
    Orders,
    Chat,
}
