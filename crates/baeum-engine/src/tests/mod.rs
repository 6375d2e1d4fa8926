mod letters;
mod support;
