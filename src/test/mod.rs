mod calc;
mod catalog;
mod form;
mod portfolio;
