mod form;
mod help;
mod spawn;
