use crate::domain::Listing;
use maud::{html, Markup};

/// Hover preview for one marker: thumbnail when the listing has a
/// picture, title and "lost on" date either way. Listing text is
/// escaped here, before the block is handed to Leaflet as a string.
pub fn listing_tooltip(listing: &Listing) -> Markup {
    html! {
        div class="listing-content" style="max-width:250px" {
            @if let Some(picture) = &listing.picture {
                img src=(picture) width="100" style="border-radius:4px;display:block";
            }
            div class="lf-title" { (listing.title.as_deref().unwrap_or("")) }
            div class="lf-date" { "Изгубено на: " (listing.date.as_deref().unwrap_or("")) }
        }
    }
}
