//! Artist create/edit submissions

use super::{FormData, FormError, ValidationErrors, finish, parse_profile, parse_profile_patch};
use crate::domain::{ArtistPatch, NewArtist};

const SEEKING_FIELD: &str = "seeking_venue";

pub fn parse_new_artist(form: &FormData) -> Result<NewArtist, ValidationErrors> {
    let mut errors: Vec<FormError> = Vec::new();
    let artist = parse_profile(form, SEEKING_FIELD, &mut errors).map(|p| NewArtist {
        name: p.name,
        city: p.city,
        state: p.state,
        phone: p.phone,
        genres: p.genres,
        image_link: p.image_link,
        facebook_link: p.facebook_link,
        website_link: p.website_link,
        seeking_venue: p.seeking,
        seeking_description: p.seeking_description,
    });

    finish(artist, errors)
}

pub fn parse_artist_patch(form: &FormData) -> Result<ArtistPatch, ValidationErrors> {
    let mut errors: Vec<FormError> = Vec::new();
    let p = parse_profile_patch(form, SEEKING_FIELD, &mut errors);

    let patch = ArtistPatch {
        name: p.name,
        city: p.city,
        state: p.state,
        phone: p.phone,
        genres: p.genres,
        image_link: p.image_link,
        facebook_link: p.facebook_link,
        website_link: p.website_link,
        seeking_venue: p.seeking,
        seeking_description: p.seeking_description,
    };

    finish(Some(patch), errors)
}
