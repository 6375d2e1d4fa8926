pub(crate) mod dictionary;
pub(crate) mod game;
pub(crate) mod letters;
pub(crate) mod lookup;
pub(crate) mod menu;
pub(crate) mod spelling;
pub(crate) mod words;
