mod injected_document;
mod properties;
mod scenarios;
