mod checkout;
mod helpers;
mod recreation;
mod sessions;
