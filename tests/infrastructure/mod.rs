mod audio;
mod persistence;
