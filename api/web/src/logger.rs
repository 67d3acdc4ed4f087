pub fn logger_format() -> &'static str {
    "%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %Ts"
}
