pub mod baidu;
pub mod http;
pub mod youdao;

#[cfg(test)]
pub(crate) mod testing;
