#[cfg(test)]
mod util;

#[cfg(test)]
mod address;
#[cfg(test)]
mod diagnostics;
#[cfg(test)]
mod subnet;
